//! Port definitions (interfaces for external dependencies).
//!
//! These traits define the boundaries between the application layer
//! and infrastructure implementations.

mod property_loader;

pub use property_loader::{LoadError, PropertyLoader};
