//! Run Refinement use case
//!
//! Orchestrates the full editorial refinement flow as a state machine of
//! rounds: critique → decide → (revise → critique → …) → end.
//!
//! Rounds never overlap. Within a round, the three reviewers are the only
//! point of concurrency: they are dispatched together on a `JoinSet` and
//! joined unconditionally — a slow or failing reviewer neither blocks nor
//! cancels its siblings, and the panel does not return until the slowest
//! one finishes. A failed reviewer contributes a neutral fallback critique
//! instead of aborting the round; a failed revision call, by contrast, is
//! a hard failure of the whole run, since there is no well-defined draft
//! to fall back to.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use redraft_domain::{
    Critique, DomainError, PromptTemplate, RefinementPolicy, RefinementState, ReviewerRole,
    Verdict, clean_final, strip_reasoning,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can terminate a refinement run
#[derive(Error, Debug)]
pub enum RunRefinementError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    #[error("Revision failed: {0}")]
    RevisionFailed(#[from] GatewayError),
}

/// Input for the RunRefinement use case
#[derive(Debug, Clone)]
pub struct RunRefinementInput {
    /// The draft to refine
    pub draft: String,
    /// Immutable supporting text (e.g. prior-scene summary)
    pub context: String,
    /// Guiding theme; a sentinel is substituted when absent
    pub theme: Option<String>,
    /// Stop/continue policy (threshold and revision ceiling)
    pub policy: RefinementPolicy,
}

impl RunRefinementInput {
    pub fn new(draft: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            draft: draft.into(),
            context: context.into(),
            theme: None,
            policy: RefinementPolicy::default(),
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn with_policy(mut self, policy: RefinementPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Final projection of a refinement run
#[derive(Debug, Clone)]
pub struct RunRefinementOutput {
    /// The refined draft, cleaned of reasoning and emphasis markup
    pub final_text: String,
    /// Full trace: one line per reviewer result plus system transitions
    pub event_log: Vec<String>,
    /// Scores of the last completed round, panel order
    pub final_scores: Vec<f64>,
}

/// Use case for running the editorial refinement workflow
pub struct RunRefinementUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> RunRefinementUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunRefinementInput,
    ) -> Result<RunRefinementOutput, RunRefinementError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunRefinementInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<RunRefinementOutput, RunRefinementError> {
        // The caller's draft may carry an artifact from a prior generation
        // step; strip it before the first critique.
        let draft = strip_reasoning(&input.draft).trim().to_string();
        let mut state = RefinementState::new(
            draft,
            input.context,
            input.theme,
            ReviewerRole::ALL.len(),
        )?;
        state.push_event("[system] Draft submitted to the editorial panel.");

        info!(
            panel_size = state.panel_size(),
            "Starting refinement workflow"
        );

        loop {
            // CRITIQUE
            let round = state.rounds_recorded() + 1;
            state.push_event(format!(
                "[system] Round {}: dispatching {} reviewers.",
                round,
                state.panel_size()
            ));
            progress.on_round_start(round, state.panel_size());

            let critiques = self.critique_round(&state, progress).await;
            state.record_round(&critiques);

            // DECIDE
            let verdict = input
                .policy
                .decide(state.iteration_count(), state.latest_scores());
            debug!(
                round,
                iteration = state.iteration_count(),
                scores = ?state.latest_scores(),
                ?verdict,
                "Round decided"
            );

            match verdict {
                Verdict::Accept => break,
                Verdict::Revise => {
                    // REVISE
                    let revised = self.revise(&state).await?;
                    state.apply_revision(revised);
                    info!(iteration = state.iteration_count(), "Revision applied");
                    progress.on_revision_complete(state.iteration_count());
                }
            }
        }

        // END
        state.push_event(format!(
            "[system] Refinement complete after {} revision(s).",
            state.iteration_count()
        ));
        info!(
            iterations = state.iteration_count(),
            rounds = state.rounds_recorded(),
            "Refinement workflow finished"
        );

        // One last defensive cleanup of the winning draft.
        let final_text = clean_final(state.draft());
        let final_scores = state.latest_scores().to_vec();
        Ok(RunRefinementOutput {
            final_text,
            event_log: state.into_event_log(),
            final_scores,
        })
    }

    /// Fan out all reviewers at once and join them unconditionally.
    ///
    /// Results come back in completion order but are re-slotted into panel
    /// order, so every round's logs line up reviewer-for-reviewer.
    async fn critique_round(
        &self,
        state: &RefinementState,
        progress: &dyn ProgressNotifier,
    ) -> Vec<Critique> {
        let mut join_set = JoinSet::new();

        for (index, role) in ReviewerRole::ALL.into_iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let prompt = role.render_prompt(state.draft(), state.context(), state.theme());

            join_set.spawn(async move {
                let result = Self::run_reviewer(&gateway, role, &prompt).await;
                (index, role, result)
            });
        }

        let mut slots: Vec<Option<Critique>> =
            (0..ReviewerRole::ALL.len()).map(|_| None).collect();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, role, Ok(critique))) => {
                    info!("Reviewer {} scored {}", role, critique.score);
                    progress.on_reviewer_complete(role, true);
                    slots[index] = Some(critique);
                }
                Ok((index, role, Err(reason))) => {
                    warn!("Reviewer {} degraded to fallback: {}", role, reason);
                    progress.on_reviewer_complete(role, false);
                    slots[index] = Some(Critique::fallback(role, &reason));
                }
                Err(e) => {
                    // A panicked task never reports its slot; it is filled
                    // with a fallback below like any other failure.
                    warn!("Reviewer task join error: {}", e);
                }
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    Critique::fallback(ReviewerRole::ALL[index], "reviewer task aborted")
                })
            })
            .collect()
    }

    /// One reviewer: prompt, generate, parse.
    ///
    /// Every failure mode — transport, malformed payload, missing fields —
    /// is flattened to a reason string at this boundary; the caller turns
    /// it into a fallback critique.
    async fn run_reviewer(
        gateway: &G,
        role: ReviewerRole,
        prompt: &str,
    ) -> Result<Critique, String> {
        let response = gateway.generate(prompt).await.map_err(|e| e.to_string())?;
        redraft_domain::parse_critique(role, &response).map_err(|e| e.to_string())
    }

    /// Rewrite the draft from the latest round's critiques only.
    async fn revise(&self, state: &RefinementState) -> Result<String, GatewayError> {
        let prompt = PromptTemplate::revision(
            state.draft(),
            state.context(),
            state.theme(),
            state.latest_critiques(),
        );
        let response = self.gateway.generate(&prompt).await?;
        Ok(clean_final(&response))
    }
}
