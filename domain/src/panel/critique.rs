//! Critique produced by a single reviewer invocation.

use super::reviewer::ReviewerRole;
use serde::{Deserialize, Serialize};

/// Score assigned when a reviewer fails and a neutral stand-in is needed.
///
/// Midpoint of the 0-10 scale, so a degraded reviewer neither forces nor
/// blocks a revision on its own.
pub const FALLBACK_SCORE: f64 = 5.0;

/// One reviewer's verdict on a draft.
///
/// Transient: produced by a reviewer invocation and immediately folded
/// into the refinement state's logs.
///
/// Scores are expected in the 0-10 range but are not clamped; an
/// out-of-range value flows into the decision threshold as-is.
///
/// # Example
///
/// ```
/// use redraft_domain::panel::{Critique, ReviewerRole};
///
/// let c = Critique::new(
///     ReviewerRole::ReaderPayoff,
///     6.0,
///     "The confrontation fizzles out",
///     "Let the rival gloat before the reversal",
/// );
/// assert_eq!(
///     c.log_entry(),
///     "Reader Payoff: The confrontation fizzles out (suggestion: Let the rival gloat before the reversal)"
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Critique {
    /// Which role produced this critique.
    pub reviewer: ReviewerRole,
    /// Numeric score, nominally 0-10.
    pub score: f64,
    /// The critique body.
    pub critique: String,
    /// Concrete revision suggestion; may be empty.
    pub suggestion: String,
}

impl Critique {
    pub fn new(
        reviewer: ReviewerRole,
        score: f64,
        critique: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            reviewer,
            score,
            critique: critique.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Neutral stand-in for a reviewer that failed.
    ///
    /// The failure stays local to this reviewer; siblings are unaffected.
    pub fn fallback(reviewer: ReviewerRole, reason: &str) -> Self {
        Self {
            reviewer,
            score: FALLBACK_SCORE,
            critique: format!("review failed: {reason}"),
            suggestion: String::new(),
        }
    }

    /// Entry appended to the critique log, consumed by the revision prompt.
    pub fn log_entry(&self) -> String {
        if self.suggestion.is_empty() {
            format!("{}: {}", self.reviewer.name(), self.critique)
        } else {
            format!(
                "{}: {} (suggestion: {})",
                self.reviewer.name(),
                self.critique,
                self.suggestion
            )
        }
    }

    /// Human-readable trace line for the event log.
    pub fn log_line(&self) -> String {
        if self.suggestion.is_empty() {
            format!(
                "[{}] (score {}) {}",
                self.reviewer.name(),
                self.score,
                self.critique
            )
        } else {
            format!(
                "[{}] (score {}) {} -> suggestion: {}",
                self.reviewer.name(),
                self.score,
                self.critique,
                self.suggestion
            )
        }
    }
}
