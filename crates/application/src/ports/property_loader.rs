//! Property loader port
//!
//! Defines the interface for reading property sources from storage.

use std::path::{Path, PathBuf};

use stencil_domain::PropertySource;

/// Errors that can occur while loading properties.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("property file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not a known property format.
    #[error("unsupported property format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The file content could not be parsed.
    #[error("failed to parse {}: {message}", .path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Loads a [`PropertySource`] from a path.
pub trait PropertyLoader {
    /// Loads the properties stored at `path`.
    ///
    /// The returned source is named after the path.
    ///
    /// # Errors
    /// Returns `LoadError::NotFound` if the file doesn't exist, and
    /// `LoadError::Parse` if its content is malformed.
    fn load(&self, path: &Path) -> Result<PropertySource, LoadError>;
}
