//! Use cases - Application business logic

mod substitute_text;

pub use substitute_text::{SubstituteText, SubstitutionOutput};
