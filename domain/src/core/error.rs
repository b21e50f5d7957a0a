//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A transition was requested on a game that cannot accept it
    /// (not started, already over, or no guess to acknowledge).
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),
}

impl DomainError {
    /// Check if this error represents a rejected state transition
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition("game is over".to_string());
        assert_eq!(error.to_string(), "Invalid transition: game is over");
    }

    #[test]
    fn test_is_invalid_transition_check() {
        assert!(DomainError::InvalidTransition("x".to_string()).is_invalid_transition());
        assert!(!DomainError::InvalidAnswer("maybe".to_string()).is_invalid_transition());
    }
}
