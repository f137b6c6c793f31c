//! Refinement workflow domain
//!
//! [`state::RefinementState`] is the single mutable record of one workflow
//! run: the draft under refinement, the append-only score/critique/event
//! logs, and the revision counter. [`policy::RefinementPolicy`] is the
//! pure stop/continue rule evaluated after every panel round.

pub mod policy;
pub mod state;

// Re-export main types
pub use policy::{RefinementPolicy, Verdict};
pub use state::{NO_THEME, RefinementState};
