//! Application layer for redraft
//!
//! This crate contains the refinement use case and the port definitions it
//! consumes. It depends only on the domain layer; LLM transport and
//! persistence are collaborators behind the [`LlmGateway`] port.

pub mod ports;
pub mod streaming;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, StreamEvent, StreamHandle},
    progress::{NoProgress, ProgressNotifier},
};
pub use streaming::detag;
pub use use_cases::run_refinement::{
    RunRefinementError, RunRefinementInput, RunRefinementOutput, RunRefinementUseCase,
};
