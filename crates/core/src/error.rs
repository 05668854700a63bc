//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Each value type owns a precise error (workday range, invoicing period);
/// those convert into this enum so callers that only need "a domain rule
/// failed" can work with a single type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation at construction.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_renders_message() {
        let err = DomainError::validation("month must be within 1..=12");
        assert_eq!(err.to_string(), "validation failed: month must be within 1..=12");
    }
}
