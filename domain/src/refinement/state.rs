//! Mutable state of one refinement run.

use crate::core::error::DomainError;
use crate::panel::critique::Critique;
use serde::{Deserialize, Serialize};

/// Sentinel theme used when the caller supplies none.
pub const NO_THEME: &str = "no explicit theme";

/// The single mutable record of a refinement run.
///
/// Owned exclusively by the orchestrating use case for the duration of one
/// workflow invocation; created fresh with empty logs, discarded once the
/// final projection is returned. Reviewer tasks never touch it — all
/// mutation happens after a round has fully completed.
///
/// The score, critique, and event logs are append-only. The "current
/// round" is always a view of the last `panel_size` entries
/// ([`latest_scores`](Self::latest_scores) /
/// [`latest_critiques`](Self::latest_critiques)), so accumulation and the
/// per-round read stay separate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementState {
    draft: String,
    context: String,
    theme: String,
    critique_log: Vec<String>,
    score_log: Vec<f64>,
    event_log: Vec<String>,
    iteration_count: u32,
    panel_size: usize,
}

impl RefinementState {
    /// Create fresh state for one workflow run.
    ///
    /// The draft is recorded verbatim; defensive cleanup of caller input
    /// is the orchestrator's job.
    pub fn new(
        draft: impl Into<String>,
        context: impl Into<String>,
        theme: Option<String>,
        panel_size: usize,
    ) -> Result<Self, DomainError> {
        let draft = draft.into();
        if draft.trim().is_empty() {
            return Err(DomainError::EmptyDraft);
        }
        if panel_size == 0 {
            return Err(DomainError::EmptyPanel);
        }

        Ok(Self {
            draft,
            context: context.into(),
            theme: theme.unwrap_or_else(|| NO_THEME.to_string()),
            critique_log: Vec::new(),
            score_log: Vec::new(),
            event_log: Vec::new(),
            iteration_count: 0,
            panel_size,
        })
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Number of revisions applied so far.
    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    pub fn panel_size(&self) -> usize {
        self.panel_size
    }

    /// Number of completed panel rounds.
    pub fn rounds_recorded(&self) -> usize {
        self.score_log.len() / self.panel_size
    }

    /// Fold one completed round into the logs, panel order preserved.
    ///
    /// Appends one score, one critique entry, and one event line per
    /// reviewer.
    pub fn record_round(&mut self, critiques: &[Critique]) {
        for critique in critiques {
            self.score_log.push(critique.score);
            self.critique_log.push(critique.log_entry());
            self.event_log.push(critique.log_line());
        }
    }

    /// Scores of the most recently recorded round.
    pub fn latest_scores(&self) -> &[f64] {
        tail(&self.score_log, self.panel_size)
    }

    /// Critique entries of the most recently recorded round.
    ///
    /// This — not the full historical log — is what the revision prompt
    /// gets, so stale feedback from earlier rounds stops influencing
    /// later rewrites.
    pub fn latest_critiques(&self) -> &[String] {
        tail(&self.critique_log, self.panel_size)
    }

    /// Replace the draft with a revision and count it.
    pub fn apply_revision(&mut self, new_draft: impl Into<String>) {
        self.draft = new_draft.into();
        self.iteration_count += 1;
        self.event_log.push(format!(
            "[system] Revision {} applied to the draft.",
            self.iteration_count
        ));
    }

    /// Append a system transition line to the event log.
    pub fn push_event(&mut self, line: impl Into<String>) {
        self.event_log.push(line.into());
    }

    pub fn event_log(&self) -> &[String] {
        &self.event_log
    }

    /// Consume the state, yielding the full event log.
    pub fn into_event_log(self) -> Vec<String> {
        self.event_log
    }

    #[cfg(test)]
    pub(crate) fn score_log(&self) -> &[f64] {
        &self.score_log
    }

    #[cfg(test)]
    pub(crate) fn critique_log(&self) -> &[String] {
        &self.critique_log
    }
}

fn tail<T>(log: &[T], n: usize) -> &[T] {
    let n = n.min(log.len());
    &log[log.len() - n..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::reviewer::ReviewerRole;

    fn round(scores: [f64; 3], tag: &str) -> Vec<Critique> {
        ReviewerRole::ALL
            .iter()
            .zip(scores)
            .map(|(role, score)| {
                Critique::new(*role, score, format!("{tag} note from {}", role.name()), "")
            })
            .collect()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = RefinementState::new("draft", "ctx", None, 3).unwrap();
        assert_eq!(state.iteration_count(), 0);
        assert_eq!(state.rounds_recorded(), 0);
        assert!(state.latest_scores().is_empty());
        assert!(state.latest_critiques().is_empty());
        assert!(state.event_log().is_empty());
    }

    #[test]
    fn test_missing_theme_uses_sentinel() {
        let state = RefinementState::new("draft", "ctx", None, 3).unwrap();
        assert_eq!(state.theme(), NO_THEME);

        let themed =
            RefinementState::new("draft", "ctx", Some("endure and grow".to_string()), 3).unwrap();
        assert_eq!(themed.theme(), "endure and grow");
    }

    #[test]
    fn test_empty_draft_rejected() {
        assert!(matches!(
            RefinementState::new("   ", "ctx", None, 3),
            Err(DomainError::EmptyDraft)
        ));
    }

    #[test]
    fn test_zero_panel_rejected() {
        assert!(matches!(
            RefinementState::new("draft", "ctx", None, 0),
            Err(DomainError::EmptyPanel)
        ));
    }

    #[test]
    fn test_log_lengths_track_rounds() {
        let mut state = RefinementState::new("draft", "ctx", None, 3).unwrap();
        state.record_round(&round([6.0, 7.0, 9.0], "r1"));
        assert_eq!(state.score_log().len(), 3);
        assert_eq!(state.critique_log().len(), 3);
        assert_eq!(state.rounds_recorded(), 1);

        state.record_round(&round([8.0, 8.0, 8.0], "r2"));
        assert_eq!(state.score_log().len(), 6);
        assert_eq!(state.critique_log().len(), 6);
        assert_eq!(state.rounds_recorded(), 2);
    }

    #[test]
    fn test_latest_views_return_last_round_in_panel_order() {
        let mut state = RefinementState::new("draft", "ctx", None, 3).unwrap();
        state.record_round(&round([6.0, 7.0, 9.0], "r1"));
        state.record_round(&round([8.0, 8.5, 9.0], "r2"));

        assert_eq!(state.latest_scores(), &[8.0, 8.5, 9.0]);
        let critiques = state.latest_critiques();
        assert_eq!(critiques.len(), 3);
        assert!(critiques[0].starts_with("Pacing & Logic:"));
        assert!(critiques[1].starts_with("Reader Payoff:"));
        assert!(critiques[2].starts_with("Thematic Depth:"));
        assert!(critiques.iter().all(|c| c.contains("r2")));
        assert!(critiques.iter().all(|c| !c.contains("r1")));
    }

    #[test]
    fn test_apply_revision_counts_and_logs() {
        let mut state = RefinementState::new("v1", "ctx", None, 3).unwrap();
        state.record_round(&round([6.0, 7.0, 9.0], "r1"));
        state.apply_revision("v2");

        assert_eq!(state.draft(), "v2");
        assert_eq!(state.iteration_count(), 1);
        assert!(
            state
                .event_log()
                .iter()
                .any(|l| l.contains("Revision 1 applied"))
        );
    }

    #[test]
    fn test_event_log_has_one_line_per_reviewer_result() {
        let mut state = RefinementState::new("draft", "ctx", None, 3).unwrap();
        state.push_event("[system] Draft submitted to the editorial panel.");
        state.record_round(&round([6.0, 7.0, 9.0], "r1"));
        // 1 system line + 3 reviewer lines
        assert_eq!(state.event_log().len(), 4);
    }
}
