//! Domain error types

use crate::review::entities::ReviewStatus;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(i64),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: ReviewStatus, to: ReviewStatus },

    #[error("Review {0} has no reply text to post")]
    MissingReply(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Check if this error was caused by the review state machine
    pub fn is_transition_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidTransition { .. } | DomainError::MissingReply(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rating_display() {
        let error = DomainError::InvalidRating(7);
        assert_eq!(error.to_string(), "Invalid rating: 7 (expected 1-5)");
    }

    #[test]
    fn test_transition_display() {
        let error = DomainError::InvalidTransition {
            from: ReviewStatus::Posted,
            to: ReviewStatus::Pending,
        };
        assert_eq!(
            error.to_string(),
            "Invalid status transition: posted -> pending"
        );
    }

    #[test]
    fn test_is_transition_error() {
        assert!(DomainError::MissingReply("r1".to_string()).is_transition_error());
        assert!(!DomainError::InvalidRating(0).is_transition_error());
        assert!(!DomainError::InvalidId(String::new()).is_transition_error());
    }
}
