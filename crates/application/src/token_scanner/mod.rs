//! Generic delimited-token scanning
//!
//! Finds every `open ... close` region in a string and replaces it with
//! whatever a [`TokenHandler`] returns for the region's content. The scanner
//! knows nothing about what tokens mean.
//!
//! A backslash directly before either marker escapes it: the backslash is
//! dropped and the marker is kept as literal text.
//!
//! ```
//! use stencil_application::token_scanner::scan_and_replace;
//!
//! let out = scan_and_replace("#{a} and \\#{b}", "#{", "}", |c: &str| c.to_uppercase()).unwrap();
//! assert_eq!(out, "A and #{b}");
//! ```

mod handler;
mod scanner;

pub use handler::TokenHandler;
pub use scanner::{TokenScanner, scan_and_replace};
