//! Property placeholder resolution
//!
//! Specializes the token scanner for `${key}` and `${key:default}`
//! placeholders resolved against a [`PropertyStore`](stencil_domain::PropertyStore).
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use stencil_application::placeholder::substitute_placeholders;
//! use stencil_domain::KEY_ENABLE_DEFAULT_VALUE;
//!
//! let props = HashMap::from([
//!     (KEY_ENABLE_DEFAULT_VALUE.to_string(), "true".to_string()),
//!     ("db.host".to_string(), "db.internal".to_string()),
//! ]);
//!
//! let url = substitute_placeholders("${db.host}:${db.port:5432}", Some(&props));
//! assert_eq!(url, "db.internal:5432");
//! ```

mod inspect;
mod resolver;

pub use inspect::find_placeholders;
pub use resolver::{PlaceholderResolver, TokenResolution, substitute_placeholders};
