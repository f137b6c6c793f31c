//! LLM Gateway port
//!
//! Defines the interface for the text-generation capability the workflow
//! consumes: a single-shot mode and a streaming mode. Adapters for real
//! providers live outside this crate.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// An event in a streaming generation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk from the model.
    Delta(String),
    /// The complete response text (signals stream end).
    Completed(String),
    /// An error that occurred mid-stream.
    Error(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta or Completed event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) | StreamEvent::Completed(s) => Some(s),
            StreamEvent::Error(_) => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_) | StreamEvent::Error(_))
    }
}

/// Gateway for text generation
///
/// Timeouts, retries, and transport concerns belong to the implementation;
/// they surface here as ordinary [`GatewayError`]s.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Single-shot text completion.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Incremental text completion.
    ///
    /// Default implementation calls [`generate`](Self::generate) and wraps
    /// the result in a single `Completed` event, so non-streaming
    /// implementations work without changes.
    async fn generate_stream(&self, prompt: &str) -> Result<StreamHandle, GatewayError> {
        let result = self.generate(prompt).await?;
        let (tx, rx) = mpsc::channel(1);
        // If the receiver is dropped, that's fine
        let _ = tx.send(StreamEvent::Completed(result)).await;
        Ok(StreamHandle::new(rx))
    }
}

/// Handle for receiving streaming events from a generation call.
///
/// Wraps an `mpsc::Receiver<StreamEvent>` and provides convenience methods
/// for consuming the stream.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect all text into a single string.
    pub async fn collect_text(mut self) -> Result<String, GatewayError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => full_text.push_str(&chunk),
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::RequestFailed(e));
                }
            }
        }
        // Channel closed without Completed — return what we have
        Ok(full_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGateway;

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
            Ok(format!("echo: {prompt}"))
        }
    }

    #[test]
    fn test_stream_event_text_and_terminal() {
        assert_eq!(StreamEvent::Delta("a".to_string()).text(), Some("a"));
        assert!(!StreamEvent::Delta("a".to_string()).is_terminal());
        assert!(StreamEvent::Completed("done".to_string()).is_terminal());
        assert_eq!(StreamEvent::Error("oops".to_string()).text(), None);
        assert!(StreamEvent::Error("oops".to_string()).is_terminal());
    }

    #[tokio::test]
    async fn test_default_stream_wraps_generate() {
        let handle = EchoGateway.generate_stream("hi").await.unwrap();
        assert_eq!(handle.collect_text().await.unwrap(), "echo: hi");
    }

    #[tokio::test]
    async fn test_collect_text_prefers_deltas() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(StreamEvent::Delta("ab".to_string())).await.unwrap();
        tx.send(StreamEvent::Delta("cd".to_string())).await.unwrap();
        tx.send(StreamEvent::Completed("ignored".to_string()))
            .await
            .unwrap();
        drop(tx);

        let text = StreamHandle::new(rx).collect_text().await.unwrap();
        assert_eq!(text, "abcd");
    }

    #[tokio::test]
    async fn test_collect_text_surfaces_stream_error() {
        let (tx, rx) = mpsc::channel(4);
        tx.send(StreamEvent::Delta("partial".to_string()))
            .await
            .unwrap();
        tx.send(StreamEvent::Error("connection reset".to_string()))
            .await
            .unwrap();
        drop(tx);

        let err = StreamHandle::new(rx).collect_text().await.unwrap_err();
        assert!(matches!(err, GatewayError::RequestFailed(_)));
    }
}
