//! Domain layer for redraft
//!
//! This crate contains the core business logic for the editorial refinement
//! workflow. It has no dependencies on infrastructure concerns — no I/O,
//! no async runtime, no LLM transport.
//!
//! # Core Concepts
//!
//! ## Editorial Panel
//!
//! A fixed set of three independent reviewer roles that each score a draft
//! (0-10) and produce a structured critique. The panel order is stable
//! across rounds.
//!
//! ## Refinement Round
//!
//! One panel pass plus the decision that follows it. The
//! [`RefinementPolicy`] decides whether the draft is rewritten (any score
//! below the threshold) or accepted (all satisfied, or the revision
//! ceiling was reached).
//!
//! ## Reasoning De-tagging
//!
//! Model output may embed internal deliberation between `<think>` and
//! `</think>` markers. [`ReasoningFilter`] removes those regions from an
//! incremental chunk stream; [`strip_reasoning`] does the same for a
//! complete string.

pub mod core;
pub mod detag;
pub mod panel;
pub mod prompt;
pub mod refinement;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use detag::{
    REASONING_CLOSE, REASONING_OPEN, ReasoningFilter, clean_final, strip_emphasis, strip_reasoning,
};
pub use panel::{
    critique::Critique,
    parsing::{CritiqueParseError, parse_critique},
    reviewer::ReviewerRole,
};
pub use prompt::PromptTemplate;
pub use refinement::{
    policy::{RefinementPolicy, Verdict},
    state::{NO_THEME, RefinementState},
};
