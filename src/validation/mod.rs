//! Plan validation module.

mod validate;

pub use validate::{validate_batches, validate_matches, ValidationResult};
