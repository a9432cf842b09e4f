//! Placeholder settings read from reserved property keys

use crate::property::PropertyStore;

/// Reserved key enabling `${key:default}` syntax.
///
/// Only the exact text `true` enables it. Absent or any other value disables it.
pub const KEY_ENABLE_DEFAULT_VALUE: &str = "stencil.placeholder.enable-default-value";

/// Reserved key overriding the separator between key and default value.
pub const KEY_DEFAULT_VALUE_SEPARATOR: &str = "stencil.placeholder.default-value-separator";

/// Separator used when [`KEY_DEFAULT_VALUE_SEPARATOR`] is not set.
pub const DEFAULT_VALUE_SEPARATOR: &str = ":";

/// How placeholder content is split into key and default value.
///
/// Built fresh for every substitution call from the properties it resolves
/// against, so two calls with different stores may behave differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSettings {
    enable_default_value: bool,
    default_value_separator: String,
}

impl PlaceholderSettings {
    /// Reads the settings from `properties`, falling back to the defaults
    /// for any reserved key that is missing (or for a missing store).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use stencil_domain::{KEY_ENABLE_DEFAULT_VALUE, PlaceholderSettings};
    ///
    /// let props = HashMap::from([(KEY_ENABLE_DEFAULT_VALUE.to_string(), "true".to_string())]);
    /// let settings = PlaceholderSettings::from_properties(Some(&props));
    /// assert!(settings.enable_default_value());
    /// assert_eq!(settings.default_value_separator(), ":");
    /// ```
    #[must_use]
    pub fn from_properties<S: PropertyStore + ?Sized>(properties: Option<&S>) -> Self {
        let Some(properties) = properties else {
            return Self::default();
        };

        let enable_default_value = properties.get(KEY_ENABLE_DEFAULT_VALUE) == Some("true");
        let default_value_separator = properties
            .get_or(KEY_DEFAULT_VALUE_SEPARATOR, DEFAULT_VALUE_SEPARATOR)
            .to_string();

        Self {
            enable_default_value,
            default_value_separator,
        }
    }

    /// Creates settings with explicit values.
    pub fn new(enable_default_value: bool, default_value_separator: impl Into<String>) -> Self {
        Self {
            enable_default_value,
            default_value_separator: default_value_separator.into(),
        }
    }

    /// Whether `${key<sep>default}` is honored.
    #[must_use]
    pub const fn enable_default_value(&self) -> bool {
        self.enable_default_value
    }

    /// The separator between key and default value.
    #[must_use]
    pub fn default_value_separator(&self) -> &str {
        &self.default_value_separator
    }

    /// Splits `content` at the first separator into `(key, default)`.
    ///
    /// Returns `None` when defaults are disabled or the separator does not
    /// occur. An empty separator matches at the start of `content`.
    #[must_use]
    pub fn split_default<'a>(&self, content: &'a str) -> Option<(&'a str, &'a str)> {
        if !self.enable_default_value {
            return None;
        }
        let index = content.find(self.default_value_separator.as_str())?;
        Some((
            &content[..index],
            &content[index + self.default_value_separator.len()..],
        ))
    }
}

impl Default for PlaceholderSettings {
    fn default() -> Self {
        Self {
            enable_default_value: false,
            default_value_separator: DEFAULT_VALUE_SEPARATOR.to_string(),
        }
    }
}
