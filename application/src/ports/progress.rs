//! Progress notification port
//!
//! Defines the interface for reporting progress during a refinement run.
//! Implementations live with the caller (console, web progress view).

use redraft_domain::ReviewerRole;

/// Callback for progress updates during refinement execution
pub trait ProgressNotifier: Send + Sync {
    /// Called when a panel round starts.
    fn on_round_start(&self, round: usize, panel_size: usize);

    /// Called when one reviewer finishes (or degrades to its fallback).
    fn on_reviewer_complete(&self, role: ReviewerRole, success: bool);

    /// Called after a revision has been applied to the draft.
    fn on_revision_complete(&self, iteration: u32);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: usize, _panel_size: usize) {}
    fn on_reviewer_complete(&self, _role: ReviewerRole, _success: bool) {}
    fn on_revision_complete(&self, _iteration: u32) {}
}
