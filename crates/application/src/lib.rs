//! Stencil Application - Token scanning and placeholder substitution
//!
//! This crate defines the application layer with:
//! - The generic delimited-token scanner
//! - The `${key}` / `${key:default}` placeholder resolver built on it
//! - Use case orchestration and port traits
//! - Application-level error handling
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use stencil_application::substitute_placeholders;
//!
//! let props = HashMap::from([("host".to_string(), "localhost".to_string())]);
//! let result = substitute_placeholders("http://${host}/api", Some(&props));
//! assert_eq!(result, "http://localhost/api");
//! ```

pub mod error;
pub mod placeholder;
pub mod ports;
pub mod token_scanner;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use placeholder::{
    PlaceholderResolver, TokenResolution, find_placeholders, substitute_placeholders,
};
pub use ports::{LoadError, PropertyLoader};
pub use token_scanner::{TokenHandler, TokenScanner, scan_and_replace};
pub use use_cases::{SubstituteText, SubstitutionOutput};
