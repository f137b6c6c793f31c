//! Application use cases

pub mod run_refinement;

pub use run_refinement::{
    RunRefinementError, RunRefinementInput, RunRefinementOutput, RunRefinementUseCase,
};
