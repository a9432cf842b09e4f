//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A delimiter marker was empty.
    #[error("{marker} delimiter must not be empty")]
    EmptyDelimiter {
        /// Which marker was empty (`open` or `close`).
        marker: &'static str,
    },

    /// A property key is malformed.
    #[error("invalid property key: {0:?}")]
    InvalidPropertyKey(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
