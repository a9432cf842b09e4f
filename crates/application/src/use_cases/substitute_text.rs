//! Substitute text use case

use stencil_domain::{DelimiterPair, PropertySources};

use crate::error::{ApplicationError, ApplicationResult};
use crate::placeholder::PlaceholderResolver;
use crate::token_scanner::TokenScanner;

/// Output containing the substituted text and resolution details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionOutput {
    /// The text with every resolvable placeholder replaced.
    pub resolved: String,
    /// Number of placeholders resolved from the properties.
    pub resolved_count: usize,
    /// Placeholders that fell back to their default value.
    pub defaulted: Vec<String>,
    /// Placeholders left as written.
    pub unresolved: Vec<String>,
    /// Whether every placeholder was resolved or defaulted.
    pub is_complete: bool,
}

/// Substitutes `${...}` placeholders in text against layered property sources.
#[derive(Debug, Clone, Default)]
pub struct SubstituteText {
    properties: PropertySources,
}

impl SubstituteText {
    /// Creates a new `SubstituteText` use case.
    #[must_use]
    pub const fn new(properties: PropertySources) -> Self {
        Self { properties }
    }

    /// Returns the property sources used for resolution.
    #[must_use]
    pub const fn properties(&self) -> &PropertySources {
        &self.properties
    }

    /// Executes the use case, substituting every placeholder in `text`.
    #[must_use]
    pub fn execute(&self, text: &str) -> SubstitutionOutput {
        let mut scanner = TokenScanner::new(
            DelimiterPair::placeholder(),
            PlaceholderResolver::new(Some(&self.properties)),
        );
        let resolved = scanner.parse(text);
        let resolver = scanner.into_handler();

        let resolved_count = resolver.resolved().len();
        let defaulted = resolver.defaulted().to_vec();
        let unresolved = resolver.into_unresolved();

        SubstitutionOutput {
            resolved,
            resolved_count,
            defaulted,
            is_complete: unresolved.is_empty(),
            unresolved,
        }
    }

    /// Like [`execute`](Self::execute), but fails if any placeholder is
    /// left unresolved.
    ///
    /// # Errors
    /// Returns `ApplicationError::Unresolved` listing the unresolved
    /// placeholders, without duplicates, in order of first appearance.
    pub fn execute_strict(&self, text: &str) -> ApplicationResult<String> {
        let output = self.execute(text);
        if output.is_complete {
            return Ok(output.resolved);
        }

        let mut names: Vec<String> = Vec::with_capacity(output.unresolved.len());
        for name in output.unresolved {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Err(ApplicationError::Unresolved { names })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use stencil_domain::{KEY_ENABLE_DEFAULT_VALUE, PropertySource};

    fn create_test_sources() -> PropertySources {
        let overrides = PropertySource::new(
            "command-line",
            HashMap::from([
                (KEY_ENABLE_DEFAULT_VALUE.into(), "true".into()),
                ("server.port".into(), "9090".into()),
            ]),
        );
        let file = PropertySource::new(
            "application.properties",
            HashMap::from([
                ("server.host".into(), "localhost".into()),
                ("server.port".into(), "8080".into()),
            ]),
        );
        [overrides, file].into_iter().collect()
    }

    #[test]
    fn test_execute_no_placeholders() {
        let use_case = SubstituteText::new(create_test_sources());
        let output = use_case.execute("Hello, World!");

        assert_eq!(output.resolved, "Hello, World!");
        assert_eq!(output.resolved_count, 0);
        assert!(output.is_complete);
    }

    #[test]
    fn test_execute_layered_resolution() {
        let use_case = SubstituteText::new(create_test_sources());
        let output = use_case.execute("http://${server.host}:${server.port}/");

        assert_eq!(output.resolved, "http://localhost:9090/");
        assert_eq!(output.resolved_count, 2);
        assert!(output.is_complete);
    }

    #[test]
    fn test_execute_reports_defaults_and_unresolved() {
        let use_case = SubstituteText::new(create_test_sources());
        let output = use_case.execute("${server.host} ${db.pool:10} ${db.url}");

        assert_eq!(output.resolved, "localhost 10 ${db.url}");
        assert_eq!(output.defaulted, vec!["db.pool:10"]);
        assert_eq!(output.unresolved, vec!["db.url"]);
        assert!(!output.is_complete);
    }

    #[test]
    fn test_execute_strict_success() {
        let use_case = SubstituteText::new(create_test_sources());
        assert_eq!(
            use_case.execute_strict("${server.host}").unwrap(),
            "localhost"
        );
    }

    #[test]
    fn test_execute_strict_lists_unresolved_once() {
        let use_case = SubstituteText::new(create_test_sources());
        let err = use_case
            .execute_strict("${a} ${b} ${a} ${server.host}")
            .unwrap_err();

        match &err {
            ApplicationError::Unresolved { names } => assert_eq!(names, &["a", "b"]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.to_string(), "unresolved placeholders: a, b");
    }

    #[test]
    fn test_empty_sources() {
        let use_case = SubstituteText::default();
        let output = use_case.execute("${anything}");

        assert_eq!(output.resolved, "${anything}");
        assert_eq!(output.unresolved, vec!["anything"]);
        assert!(use_case.properties().is_empty());
    }
}
