//! Editorial panel domain
//!
//! The panel is a fixed set of three reviewer roles, each reading the same
//! draft from a different angle:
//!
//! - **Pacing & Logic** — internal consistency and pacing audit
//! - **Reader Payoff** — audience-seat check of anticipation and release
//! - **Thematic Depth** — alignment with the novel's guiding theme
//!
//! Each role produces a [`Critique`] with a 0-10 score. Reviewer responses
//! arrive as loosely structured JSON and are decoded by
//! [`parsing::parse_critique`] into a tagged result; a failed parse is the
//! caller's cue to substitute [`Critique::fallback`].

pub mod critique;
pub mod parsing;
pub mod reviewer;

// Re-export main types
pub use critique::Critique;
pub use parsing::{CritiqueParseError, parse_critique};
pub use reviewer::ReviewerRole;
