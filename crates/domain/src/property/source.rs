//! Named and layered property sources.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::PropertyStore;
use crate::error::{DomainError, DomainResult};

/// A collection of properties from a single origin.
///
/// A `PropertySource` represents properties loaded from one file or
/// supplied in memory. Several sources are layered by [`PropertySources`].
///
/// # Example
///
/// ```
/// use stencil_domain::{PropertySource, PropertyStore};
/// use std::collections::HashMap;
///
/// let mut props = HashMap::new();
/// props.insert("server.port".to_string(), "8080".to_string());
///
/// let source = PropertySource::new("application.properties", props);
/// assert_eq!(source.get("server.port"), Some("8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySource {
    /// Name of the source (typically the file name)
    name: String,
    /// Key-value properties from this source
    properties: HashMap<String, String>,
}

impl PropertySource {
    /// Creates a new `PropertySource` with the given name and properties.
    pub fn new(name: impl Into<String>, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Creates an empty `PropertySource`.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, HashMap::new())
    }

    /// Returns the name of this property source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the properties map.
    #[must_use]
    pub const fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }

    /// Sets a property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    /// Sets a property from a `KEY=VALUE` assignment.
    ///
    /// The value may be empty and may itself contain `=`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPropertyKey`] if there is no `=` or the
    /// key is blank.
    pub fn insert_assignment(&mut self, assignment: &str) -> DomainResult<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| DomainError::InvalidPropertyKey(assignment.to_string()))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::InvalidPropertyKey(assignment.to_string()));
        }

        self.insert(key, value);
        Ok(())
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyStore for PropertySource {
    fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }
}

/// Ordered property sources, searched front to back.
///
/// The first source containing a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySources {
    sources: Vec<PropertySource>,
}

impl PropertySources {
    /// Creates an empty set of sources.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a source with the lowest precedence.
    pub fn push_back(&mut self, source: PropertySource) {
        self.sources.push(source);
    }

    /// Adds a source with the highest precedence.
    pub fn push_front(&mut self, source: PropertySource) {
        self.sources.insert(0, source);
    }

    /// Returns the sources in precedence order.
    #[must_use]
    pub fn sources(&self) -> &[PropertySource] {
        &self.sources
    }

    /// Returns the number of sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if there are no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl PropertyStore for PropertySources {
    fn get(&self, key: &str) -> Option<&str> {
        self.sources.iter().find_map(|source| source.get(key))
    }
}

impl FromIterator<PropertySource> for PropertySources {
    fn from_iter<I: IntoIterator<Item = PropertySource>>(iter: I) -> Self {
        Self {
            sources: iter.into_iter().collect(),
        }
    }
}
