//! Stencil Domain - Core substitution types
//!
//! This crate defines the domain model for Stencil: delimiter pairs,
//! the property store contract, and the placeholder settings read from it.
//! All types here are pure Rust with no I/O dependencies.

pub mod delimiter;
pub mod error;
pub mod property;
pub mod settings;

pub use delimiter::DelimiterPair;
pub use error::{DomainError, DomainResult};
pub use property::{PropertySource, PropertySources, PropertyStore};
pub use settings::{
    DEFAULT_VALUE_SEPARATOR, KEY_DEFAULT_VALUE_SEPARATOR, KEY_ENABLE_DEFAULT_VALUE,
    PlaceholderSettings,
};
