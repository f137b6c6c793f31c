//! Critique response parsing.
//!
//! Reviewers are asked for a strict JSON object, but models wrap the
//! payload in code fences or surrounding prose often enough that the
//! parser has to dig for it. Extraction is best-effort: strip an optional
//! fence, then take the outermost `{ … }` span and decode it.
//!
//! Parsing is pure domain logic — no I/O, no session management. Failures
//! come back as a tagged [`CritiqueParseError`] rather than an exception
//! path; converting them into a fallback critique is the panel's decision,
//! not the parser's.

use super::critique::Critique;
use super::reviewer::ReviewerRole;
use serde::Deserialize;
use thiserror::Error;

/// Why a reviewer response could not be decoded.
#[derive(Error, Debug)]
pub enum CritiqueParseError {
    #[error("no JSON payload found in response")]
    NoPayload,

    #[error("invalid critique payload: {0}")]
    Invalid(String),
}

/// Wire shape of a reviewer response.
///
/// `score` is required; a response without it counts as malformed.
#[derive(Deserialize)]
struct RawCritique {
    score: f64,
    #[serde(default)]
    critique: String,
    #[serde(default)]
    suggestion: String,
}

/// Decode a reviewer's raw response into a [`Critique`].
///
/// Scores are passed through unclamped.
///
/// # Example
///
/// ```
/// use redraft_domain::panel::{ReviewerRole, parse_critique};
///
/// let response = r#"```json
/// {"score": 7.5, "critique": "Setup drags", "suggestion": "Cut scene two"}
/// ```"#;
/// let c = parse_critique(ReviewerRole::PacingLogic, response).unwrap();
/// assert_eq!(c.score, 7.5);
/// assert_eq!(c.critique, "Setup drags");
/// ```
pub fn parse_critique(
    reviewer: ReviewerRole,
    response: &str,
) -> Result<Critique, CritiqueParseError> {
    let body = strip_code_fence(response);

    let start = body.find('{').ok_or(CritiqueParseError::NoPayload)?;
    let end = body.rfind('}').ok_or(CritiqueParseError::NoPayload)?;
    if end < start {
        return Err(CritiqueParseError::NoPayload);
    }

    let payload = &body[start..=end];
    let raw: RawCritique = serde_json::from_str(payload)
        .map_err(|e| CritiqueParseError::Invalid(e.to_string()))?;

    Ok(Critique::new(reviewer, raw.score, raw.critique, raw.suggestion))
}

/// Strip an optional fenced code block, returning its interior.
fn strip_code_fence(response: &str) -> &str {
    if let Some((_, rest)) = response.split_once("```json") {
        rest.split("```").next().unwrap_or(rest)
    } else if let Some((_, rest)) = response.split_once("```") {
        rest.split("```").next().unwrap_or(rest)
    } else {
        response
    }
}
