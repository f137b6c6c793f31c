//! Prompt templates for the refinement flow.

pub mod template;

pub use template::PromptTemplate;
