//! File-based property loading.
//!
//! The format is chosen from the file extension:
//! ```text
//! application.properties   key=value lines
//! application.json         nested object, flattened to dotted keys
//! application.yaml / .yml  nested mapping, flattened to dotted keys
//! ```

mod properties;
mod structured;

use std::collections::HashMap;
use std::io;
use std::path::Path;

use stencil_application::ports::{LoadError, PropertyLoader};
use stencil_domain::PropertySource;

pub use properties::parse_properties;
pub use structured::{parse_json, parse_yaml};

/// Error type for property file parsing.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// JSON parsing failed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document's top level is not a mapping.
    #[error("top level must be a mapping")]
    NotAMapping,

    /// A mapping key is not a scalar.
    #[error("mapping key under {0:?} is not a scalar")]
    NonScalarKey(String),

    /// `.properties` parsing failed.
    #[error("invalid properties: {0}")]
    Properties(#[from] java_properties::PropertiesError),
}

/// Supported property file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyFormat {
    /// Java-style `.properties`.
    Properties,
    /// JSON object.
    Json,
    /// YAML mapping.
    Yaml,
}

impl PropertyFormat {
    /// Detects the format from a path's extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "properties" => Some(Self::Properties),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parses `content` in this format into flat properties.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed.
    pub fn parse(self, content: &str) -> Result<HashMap<String, String>, FormatError> {
        match self {
            Self::Properties => parse_properties(content),
            Self::Json => parse_json(content),
            Self::Yaml => parse_yaml(content),
        }
    }
}

/// Loads property sources from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilePropertyLoader;

impl FilePropertyLoader {
    /// Creates a new file property loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PropertyLoader for FilePropertyLoader {
    fn load(&self, path: &Path) -> Result<PropertySource, LoadError> {
        let format = PropertyFormat::from_path(path)
            .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_path_buf())
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let properties = format.parse(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            ?format,
            entries = properties.len(),
            "loaded property file"
        );

        Ok(PropertySource::new(path.display().to_string(), properties))
    }
}
