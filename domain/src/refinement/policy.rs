//! Stop/continue policy for the refinement loop.

use serde::{Deserialize, Serialize};

/// Decision after a panel round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Rewrite the draft and run another round.
    Revise,
    /// Keep the current draft and terminate.
    Accept,
}

/// Policy parameters for deciding whether a draft needs another revision.
///
/// Pure: no side effects, no external calls. The defaults (threshold 8.0,
/// ceiling 2) are the editorial board's standing rule; both are exposed
/// for override but carry no configuration machinery beyond that.
///
/// # Example
///
/// ```
/// use redraft_domain::refinement::{RefinementPolicy, Verdict};
///
/// let policy = RefinementPolicy::default();
/// assert_eq!(policy.decide(0, &[6.0, 7.0, 9.0]), Verdict::Revise);
/// assert_eq!(policy.decide(0, &[8.0, 8.0, 8.0]), Verdict::Accept);
/// // Ceiling wins regardless of scores.
/// assert_eq!(policy.decide(2, &[1.0, 2.0, 3.0]), Verdict::Accept);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinementPolicy {
    /// Any round score below this requests a revision.
    pub score_threshold: f64,
    /// Hard ceiling on revision cycles, regardless of quality.
    pub max_revisions: u32,
}

impl Default for RefinementPolicy {
    fn default() -> Self {
        Self {
            score_threshold: 8.0,
            max_revisions: 2,
        }
    }
}

impl RefinementPolicy {
    /// Decide whether to revise again, given the number of revisions
    /// already applied and the latest round's scores.
    ///
    /// An empty score slice accepts; it means there is no round to act on.
    pub fn decide(&self, iteration_count: u32, latest_scores: &[f64]) -> Verdict {
        if iteration_count >= self.max_revisions {
            return Verdict::Accept;
        }
        if latest_scores.is_empty() {
            return Verdict::Accept;
        }
        if latest_scores.iter().any(|s| *s < self.score_threshold) {
            Verdict::Revise
        } else {
            Verdict::Accept
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_low_score_revises() {
        let policy = RefinementPolicy::default();
        assert_eq!(policy.decide(0, &[6.0, 7.0, 9.0]), Verdict::Revise);
        assert_eq!(policy.decide(1, &[7.9, 8.0, 8.0]), Verdict::Revise);
    }

    #[test]
    fn test_all_satisfied_accepts_before_ceiling() {
        let policy = RefinementPolicy::default();
        assert_eq!(policy.decide(0, &[8.0, 8.0, 8.0]), Verdict::Accept);
        assert_eq!(policy.decide(1, &[9.5, 8.1, 10.0]), Verdict::Accept);
    }

    #[test]
    fn test_ceiling_accepts_regardless_of_scores() {
        let policy = RefinementPolicy::default();
        assert_eq!(policy.decide(2, &[1.0, 2.0, 3.0]), Verdict::Accept);
        assert_eq!(policy.decide(3, &[0.0]), Verdict::Accept);
    }

    #[test]
    fn test_empty_scores_accept() {
        let policy = RefinementPolicy::default();
        assert_eq!(policy.decide(0, &[]), Verdict::Accept);
    }

    #[test]
    fn test_override_parameters() {
        let strict = RefinementPolicy {
            score_threshold: 9.5,
            max_revisions: 1,
        };
        assert_eq!(strict.decide(0, &[9.0, 9.4]), Verdict::Revise);
        assert_eq!(strict.decide(1, &[2.0]), Verdict::Accept);
    }

    #[test]
    fn test_out_of_range_scores_compare_as_is() {
        let policy = RefinementPolicy::default();
        // Scores are never clamped upstream; -1 is simply below threshold.
        assert_eq!(policy.decide(0, &[-1.0, 12.0]), Verdict::Revise);
        assert_eq!(policy.decide(0, &[12.0, 11.0]), Verdict::Accept);
    }
}
