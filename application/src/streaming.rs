//! De-tagged streaming.
//!
//! Bridges a raw [`StreamHandle`] to a consumer-facing one with reasoning
//! regions removed. Every component that streams model output to the
//! outside goes through [`detag`].

use crate::ports::llm_gateway::{StreamEvent, StreamHandle};
use redraft_domain::{ReasoningFilter, strip_reasoning};
use tokio::sync::mpsc;

/// Wrap a raw generation stream so that suppressed reasoning regions never
/// reach the consumer.
///
/// `Delta` chunks pass through a [`ReasoningFilter`] (the filter buffers
/// across chunk boundaries, so split markers are handled); a `Completed`
/// payload is cleaned as a whole string; `Error` passes through untouched.
/// Any text the filter still holds at stream end is flushed before the
/// terminal event.
pub fn detag(mut handle: StreamHandle) -> StreamHandle {
    let (tx, rx) = mpsc::channel(32);

    tokio::spawn(async move {
        let mut filter = ReasoningFilter::new();
        let mut completed = None;

        while let Some(event) = handle.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    let visible = filter.push(&chunk);
                    if !visible.is_empty()
                        && tx.send(StreamEvent::Delta(visible)).await.is_err()
                    {
                        // Consumer went away; stop pumping.
                        return;
                    }
                }
                StreamEvent::Completed(text) => {
                    completed = Some(text);
                    break;
                }
                StreamEvent::Error(e) => {
                    let _ = tx.send(StreamEvent::Error(e)).await;
                    return;
                }
            }
        }

        let tail = filter.finish();
        if !tail.is_empty() {
            let _ = tx.send(StreamEvent::Delta(tail)).await;
        }
        if let Some(text) = completed {
            let _ = tx
                .send(StreamEvent::Completed(strip_reasoning(&text)))
                .await;
        }
    });

    StreamHandle::new(rx)
}
