//! Error types for nameid.
//!
//! Exactly one error type is exposed. The two failure origins the generator
//! can hit (absent input vs. unavailable digest algorithm) are kept apart as
//! variants so callers can tell a caller-fixable fault from an environment
//! fault without parsing messages.

use thiserror::Error;

/// Result alias used across the crate.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation failure raised by the generator entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An argument was absent or malformed. Caller-fixable.
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested digest algorithm is not available. Not fixable by
    /// adjusting inputs, and will not change within a process lifetime.
    #[error("{0}")]
    AlgorithmUnavailable(String),
}

impl ValidationError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn algorithm_unavailable(message: impl Into<String>) -> Self {
        Self::AlgorithmUnavailable(message.into())
    }
}
