//! Stencil Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod loader;

pub use loader::{
    FilePropertyLoader, FormatError, PropertyFormat, parse_json, parse_properties, parse_yaml,
};
