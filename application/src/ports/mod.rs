//! Ports (interfaces) consumed by the application layer.
//!
//! Implementations (adapters) live with the caller: an HTTP backend, a
//! provider SDK, a test double.

pub mod llm_gateway;
pub mod progress;

pub use llm_gateway::{GatewayError, LlmGateway, StreamEvent, StreamHandle};
pub use progress::{NoProgress, ProgressNotifier};
