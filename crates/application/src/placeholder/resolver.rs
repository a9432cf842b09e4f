//! Placeholder resolver
//!
//! Resolves `${key}` and `${key<sep>default}` against a property store.

use stencil_domain::{DelimiterPair, PlaceholderSettings, PropertyStore};

use crate::token_scanner::{TokenHandler, TokenScanner};

/// Outcome of resolving one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenResolution {
    /// The key was found in the store.
    Resolved(String),
    /// The key was missing and the placeholder's default value was used.
    Defaulted(String),
    /// Nothing matched; the placeholder is kept as written.
    Unresolved,
}

/// Token handler that resolves placeholder content against a property store.
///
/// Settings are read from the store's reserved keys once, at construction.
/// The resolver also keeps a ledger of what happened to each token it
/// handled, in order.
#[derive(Debug)]
pub struct PlaceholderResolver<'a, S: ?Sized> {
    properties: Option<&'a S>,
    settings: PlaceholderSettings,
    delimiters: DelimiterPair,
    resolved: Vec<String>,
    defaulted: Vec<String>,
    unresolved: Vec<String>,
}

impl<'a, S: PropertyStore + ?Sized> PlaceholderResolver<'a, S> {
    /// Creates a resolver over `properties`, which may be absent.
    #[must_use]
    pub fn new(properties: Option<&'a S>) -> Self {
        let settings = PlaceholderSettings::from_properties(properties);
        tracing::debug!(
            enable_default_value = settings.enable_default_value(),
            separator = settings.default_value_separator(),
            has_properties = properties.is_some(),
            "placeholder resolver configured"
        );

        Self {
            properties,
            settings,
            delimiters: DelimiterPair::placeholder(),
            resolved: Vec::new(),
            defaulted: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// Resolves a single placeholder's content without recording it.
    ///
    /// With defaults enabled and the separator present, the text before the
    /// first separator is the key and the text after it the default. In every
    /// other case the whole content is the key.
    #[must_use]
    pub fn resolve(&self, content: &str) -> TokenResolution {
        let Some(properties) = self.properties else {
            return TokenResolution::Unresolved;
        };

        if let Some((key, default_value)) = self.settings.split_default(content) {
            return match properties.get(key) {
                Some(value) => TokenResolution::Resolved(value.to_string()),
                None => TokenResolution::Defaulted(default_value.to_string()),
            };
        }

        properties
            .get(content)
            .map_or(TokenResolution::Unresolved, |value| {
                TokenResolution::Resolved(value.to_string())
            })
    }

    /// Placeholders that resolved to a stored value.
    #[must_use]
    pub fn resolved(&self) -> &[String] {
        &self.resolved
    }

    /// Placeholders that fell back to their default value.
    #[must_use]
    pub fn defaulted(&self) -> &[String] {
        &self.defaulted
    }

    /// Placeholders left as written.
    #[must_use]
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Consumes the resolver, returning the unresolved placeholder contents.
    #[must_use]
    pub fn into_unresolved(self) -> Vec<String> {
        self.unresolved
    }
}

impl<S: PropertyStore + ?Sized> TokenHandler for PlaceholderResolver<'_, S> {
    fn handle_token(&mut self, content: &str) -> String {
        match self.resolve(content) {
            TokenResolution::Resolved(value) => {
                tracing::trace!(placeholder = content, "resolved");
                self.resolved.push(content.to_string());
                value
            }
            TokenResolution::Defaulted(value) => {
                tracing::trace!(placeholder = content, "default value used");
                self.defaulted.push(content.to_string());
                value
            }
            TokenResolution::Unresolved => {
                tracing::trace!(placeholder = content, "unresolved");
                self.unresolved.push(content.to_string());
                self.delimiters.wrap(content)
            }
        }
    }
}

/// Replaces every `${...}` placeholder in `text` using `properties`.
///
/// Unresolvable placeholders, and all placeholders when `properties` is
/// `None`, are reproduced exactly as written.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use stencil_application::substitute_placeholders;
///
/// let props = HashMap::from([("a".to_string(), "1".to_string())]);
/// assert_eq!(substitute_placeholders("${a}-${b}", Some(&props)), "1-${b}");
/// ```
pub fn substitute_placeholders<S: PropertyStore + ?Sized>(
    text: &str,
    properties: Option<&S>,
) -> String {
    TokenScanner::new(
        DelimiterPair::placeholder(),
        PlaceholderResolver::new(properties),
    )
    .parse(text)
}
