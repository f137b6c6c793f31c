//! Reviewer roles of the editorial panel.

use crate::prompt::PromptTemplate;
use serde::{Deserialize, Serialize};

/// One independently prompted reviewer role within the editorial panel.
///
/// The panel composition is fixed; [`ReviewerRole::ALL`] defines the
/// stable order used for dispatch and for every per-round log slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerRole {
    /// Checks pacing, setup length, and internal plot logic.
    PacingLogic,
    /// Reads from the audience's seat: anticipation and emotional payoff.
    ReaderPayoff,
    /// Checks that turning points echo the novel's guiding theme.
    ThematicDepth,
}

impl ReviewerRole {
    /// All panel roles, in dispatch order.
    pub const ALL: [ReviewerRole; 3] = [
        ReviewerRole::PacingLogic,
        ReviewerRole::ReaderPayoff,
        ReviewerRole::ThematicDepth,
    ];

    /// Display name used in logs and critique entries.
    pub fn name(&self) -> &'static str {
        match self {
            ReviewerRole::PacingLogic => "Pacing & Logic",
            ReviewerRole::ReaderPayoff => "Reader Payoff",
            ReviewerRole::ThematicDepth => "Thematic Depth",
        }
    }

    /// Render this role's critique prompt for the given draft.
    pub fn render_prompt(&self, draft: &str, context: &str, theme: &str) -> String {
        match self {
            ReviewerRole::PacingLogic => PromptTemplate::pacing_logic_review(draft, context),
            ReviewerRole::ReaderPayoff => PromptTemplate::reader_payoff_review(draft, context),
            ReviewerRole::ThematicDepth => {
                PromptTemplate::thematic_depth_review(draft, context, theme)
            }
        }
    }
}

impl std::fmt::Display for ReviewerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
