//! Removal of embedded reasoning markup from model output.
//!
//! Reasoning-capable models interleave internal deliberation with the
//! externally visible text, delimited by [`REASONING_OPEN`] and
//! [`REASONING_CLOSE`]. Consumers must never see that region.
//!
//! Two paths are provided:
//!
//! - [`ReasoningFilter`] — incremental, for token streams whose chunk
//!   boundaries do not align with the markers. Detection always runs on a
//!   cumulative buffer, so a marker split across two chunks is still
//!   caught.
//! - [`strip_reasoning`] — one-shot, for fully materialized text.
//!
//! A separate stateless pass, [`strip_emphasis`], removes the cosmetic
//! `**` markup and is only ever applied to complete text.

/// Marker opening a suppressed reasoning region.
pub const REASONING_OPEN: &str = "<think>";

/// Marker closing a suppressed reasoning region.
pub const REASONING_CLOSE: &str = "</think>";

/// Cosmetic emphasis markup stripped from final text.
pub const EMPHASIS_MARK: &str = "**";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FilterState {
    /// Emitting text, watching for the open marker.
    #[default]
    Normal,
    /// Inside a reasoning region, watching for the close marker.
    Suppressed,
}

/// Stateful pass-through filter that drops reasoning regions from a
/// chunked text stream.
///
/// Each [`push`](Self::push) appends the incoming chunk to an internal
/// buffer and returns whatever text became visible as a result. Call
/// [`finish`](Self::finish) at stream end to flush the remainder.
///
/// The concatenation of all `push` outputs plus `finish` equals the input
/// with every reasoning region removed. An unterminated region is dropped
/// silently.
///
/// The filter is owned by a single logical stream; it is not meant to be
/// shared across concurrent streams.
///
/// # Example
///
/// ```
/// use redraft_domain::detag::ReasoningFilter;
///
/// let mut filter = ReasoningFilter::new();
/// let mut out = filter.push("Hello <thi");
/// out.push_str(&filter.push("nk>hidden</think> world"));
/// out.push_str(&filter.finish());
/// assert_eq!(out, "Hello  world");
/// ```
#[derive(Debug, Default)]
pub struct ReasoningFilter {
    state: FilterState,
    buffer: String,
}

impl ReasoningFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, returning the text that became visible.
    pub fn push(&mut self, chunk: &str) -> String {
        self.buffer.push_str(chunk);
        let mut visible = String::new();

        loop {
            match self.state {
                FilterState::Suppressed => {
                    if let Some(idx) = self.buffer.find(REASONING_CLOSE) {
                        // Drop the suppressed region and the marker, keep scanning.
                        self.buffer.drain(..idx + REASONING_CLOSE.len());
                        self.state = FilterState::Normal;
                    } else {
                        // All suppressed content, except a tail that could still
                        // turn out to be the close marker.
                        let keep = partial_marker_len(&self.buffer, REASONING_CLOSE);
                        let cut = self.buffer.len() - keep;
                        self.buffer.drain(..cut);
                        break;
                    }
                }
                FilterState::Normal => {
                    if let Some(idx) = self.buffer.find(REASONING_OPEN) {
                        visible.push_str(&self.buffer[..idx]);
                        self.buffer.drain(..idx + REASONING_OPEN.len());
                        self.state = FilterState::Suppressed;
                    } else {
                        let keep = partial_marker_len(&self.buffer, REASONING_OPEN);
                        let cut = self.buffer.len() - keep;
                        visible.push_str(&self.buffer[..cut]);
                        self.buffer.drain(..cut);
                        break;
                    }
                }
            }
        }

        visible
    }

    /// Flush at stream end.
    ///
    /// Returns the remaining buffered text when in the normal state;
    /// nothing when still suppressed (unterminated region).
    pub fn finish(self) -> String {
        match self.state {
            FilterState::Normal => self.buffer,
            FilterState::Suppressed => String::new(),
        }
    }
}

/// Length of the longest buffer suffix that is a proper prefix of `marker`.
///
/// Both markers are ASCII, so the returned length always lands on a char
/// boundary of `buffer`.
fn partial_marker_len(buffer: &str, marker: &str) -> usize {
    let marker = marker.as_bytes();
    let buf = buffer.as_bytes();
    let max = (marker.len() - 1).min(buf.len());
    for len in (1..=max).rev() {
        if buf[buf.len() - len..] == marker[..len] {
            return len;
        }
    }
    0
}

/// Remove every reasoning region from a complete string.
///
/// Same marker-pair rule as [`ReasoningFilter`], applied in one pass.
pub fn strip_reasoning(text: &str) -> String {
    let mut filter = ReasoningFilter::new();
    let mut out = filter.push(text);
    out.push_str(&filter.finish());
    out
}

/// Remove the cosmetic emphasis markup from fully materialized text.
pub fn strip_emphasis(text: &str) -> String {
    text.replace(EMPHASIS_MARK, "")
}

/// Composite cleanup for a finished draft: drop reasoning regions, drop
/// emphasis markup, trim surrounding whitespace.
pub fn clean_final(text: &str) -> String {
    strip_emphasis(&strip_reasoning(text)).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a chunk sequence through the filter and concatenate everything.
    fn filter_chunks(chunks: &[&str]) -> String {
        let mut filter = ReasoningFilter::new();
        let mut out = String::new();
        for chunk in chunks {
            out.push_str(&filter.push(chunk));
        }
        out.push_str(&filter.finish());
        out
    }

    #[test]
    fn test_no_markers_round_trip() {
        let chunks = ["The hero ", "drew his ", "sword."];
        assert_eq!(filter_chunks(&chunks), "The hero drew his sword.");
    }

    #[test]
    fn test_marker_within_single_chunk() {
        let chunks = ["before <think>internal</think>after"];
        assert_eq!(filter_chunks(&chunks), "before after");
    }

    #[test]
    fn test_start_marker_split_across_chunks() {
        // Marker halves arrive in separate chunks — suppression must still
        // trigger exactly as if the marker arrived whole.
        let chunks = ["visible <thi", "nk>secret</think> tail"];
        assert_eq!(filter_chunks(&chunks), "visible  tail");
    }

    #[test]
    fn test_close_marker_split_across_chunks() {
        let chunks = ["a<think>hidden</th", "ink>b"];
        assert_eq!(filter_chunks(&chunks), "ab");
    }

    #[test]
    fn test_marker_split_one_byte_per_chunk() {
        let chunks = ["x", "<", "t", "h", "i", "n", "k", ">", "no", "<", "/think>", "y"];
        assert_eq!(filter_chunks(&chunks), "xy");
    }

    #[test]
    fn test_multiple_regions() {
        let chunks = ["a<think>1</think>b<thi", "nk>2</think>c"];
        assert_eq!(filter_chunks(&chunks), "abc");
    }

    #[test]
    fn test_unterminated_region_dropped() {
        let chunks = ["kept <think>never closed"];
        assert_eq!(filter_chunks(&chunks), "kept ");
    }

    #[test]
    fn test_false_partial_marker_flushed_at_end() {
        // A lone "<" is held back as a potential marker start, then flushed
        // by finish() once the stream ends.
        let mut filter = ReasoningFilter::new();
        assert_eq!(filter.push("a < b <"), "a < b ");
        assert_eq!(filter.finish(), "<");
    }

    #[test]
    fn test_partial_then_ordinary_text() {
        let chunks = ["a <t", "ree stood"];
        assert_eq!(filter_chunks(&chunks), "a <tree stood");
    }

    #[test]
    fn test_strip_reasoning_whole_string() {
        assert_eq!(
            strip_reasoning("x<think>plan</think>y<think>more</think>z"),
            "xyz"
        );
        assert_eq!(strip_reasoning("no markers"), "no markers");
        assert_eq!(strip_reasoning("<think>only reasoning</think>"), "");
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("a **bold** word"), "a bold word");
        assert_eq!(strip_emphasis("plain"), "plain");
    }

    #[test]
    fn test_clean_final() {
        let raw = "  <think>let me rewrite</think>The **blade** sang.  ";
        assert_eq!(clean_final(raw), "The blade sang.");
    }

    #[test]
    fn test_multibyte_text_passes_through() {
        let chunks = ["雪は<think>考え中</think>降り続く"];
        assert_eq!(filter_chunks(&chunks), "雪は降り続く");
    }
}
