//! Application error types

use stencil_domain::DomainError;
use thiserror::Error;

use crate::ports::LoadError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Properties could not be loaded.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Placeholders were left unresolved in strict mode.
    #[error("unresolved placeholders: {}", .names.join(", "))]
    Unresolved {
        /// Content of each unresolved placeholder, in order of appearance.
        names: Vec<String>,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
