//! End-to-end substitution tests
//!
//! These tests load property files from disk with the file-based loader,
//! layer them, and run the substitution use case over templates.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use stencil_application::{ApplicationError, LoadError, PropertyLoader, SubstituteText};
use stencil_domain::{KEY_ENABLE_DEFAULT_VALUE, PropertySource, PropertySources};
use stencil_infrastructure::FilePropertyLoader;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

#[test]
fn test_properties_file_substitution() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = write(
        temp_dir.path(),
        "jdbc.properties",
        "# connection\njdbc.driver=org.h2.Driver\njdbc.url=jdbc:h2:mem:test\njdbc.user = sa\n",
    );

    let source = FilePropertyLoader::new().load(&path).unwrap();
    let use_case = SubstituteText::new([source].into_iter().collect());

    let output = use_case.execute("driver=${jdbc.driver}\nurl=${jdbc.url}\nuser=${jdbc.user}\n");

    assert_eq!(
        output.resolved,
        "driver=org.h2.Driver\nurl=jdbc:h2:mem:test\nuser=sa\n"
    );
    assert_eq!(output.resolved_count, 3);
    assert!(output.is_complete);
}

#[test]
fn test_layered_yaml_over_properties() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let base = write(
        temp_dir.path(),
        "application.properties",
        "server.host=localhost\nserver.port=8080\n",
    );
    let prod = write(
        temp_dir.path(),
        "application-prod.yaml",
        "server:\n  host: api.example.com\n",
    );

    let loader = FilePropertyLoader::new();
    let mut sources = PropertySources::new();
    sources.push_front(loader.load(&base).unwrap());
    sources.push_front(loader.load(&prod).unwrap());

    let output = SubstituteText::new(sources).execute("https://${server.host}:${server.port}");
    assert_eq!(output.resolved, "https://api.example.com:8080");
}

#[test]
fn test_defaults_enabled_from_json_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = write(
        temp_dir.path(),
        "settings.json",
        &format!(r#"{{"{KEY_ENABLE_DEFAULT_VALUE}": true, "db": {{"user": "admin"}}}}"#),
    );

    let source = FilePropertyLoader::new().load(&path).unwrap();
    let use_case = SubstituteText::new([source].into_iter().collect());

    let output = use_case.execute("${db.user:root}/${db.password:changeme}");
    assert_eq!(output.resolved, "admin/changeme");
    assert_eq!(output.defaulted, vec!["db.password:changeme"]);
}

#[test]
fn test_strict_mode_reports_unresolved() {
    let use_case = SubstituteText::new(
        [PropertySource::empty("empty")].into_iter().collect(),
    );

    let err = use_case
        .execute_strict("Hello ${user}, \\${literal} stays")
        .unwrap_err();

    match err {
        ApplicationError::Unresolved { names } => assert_eq!(names, vec!["user"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_escapes_and_unterminated_survive_end_to_end() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = write(temp_dir.path(), "app.properties", "name=stencil\n");

    let source = FilePropertyLoader::new().load(&path).unwrap();
    let output = SubstituteText::new([source].into_iter().collect())
        .execute("${name} \\${name} ${name");

    assert_eq!(output.resolved, "stencil ${name} ${name");
}

#[test]
fn test_missing_property_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let err = FilePropertyLoader::new()
        .load(&temp_dir.path().join("absent.yaml"))
        .unwrap_err();

    assert!(matches!(err, LoadError::NotFound(_)));
    assert!(err.to_string().contains("absent.yaml"));
}
