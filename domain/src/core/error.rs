//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Draft is empty")]
    EmptyDraft,

    #[error("Editorial panel has no reviewers")]
    EmptyPanel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyDraft.to_string(), "Draft is empty");
        assert_eq!(
            DomainError::EmptyPanel.to_string(),
            "Editorial panel has no reviewers"
        );
    }
}
