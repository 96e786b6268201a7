//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a synchronous rejection raised at construction time or at
/// the point of mutation. None of them are retryable; they signal bad input or
/// a programming error in the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was absent (e.g. a field missing from a serialized record).
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// A value was present but violates a domain rule.
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A domain invariant was violated (e.g. decimal overflow while totalling).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingArgument(field.into())
    }

    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Name of the offending argument, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingArgument(field) => Some(field),
            Self::InvalidValue { field, .. } => Some(field),
            Self::InvariantViolation(_) => None,
        }
    }
}
