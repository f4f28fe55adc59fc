//! Dataset Validation
//!
//! Checks a text dataset against the shape its task type expects before
//! extraction, reporting every problem at once.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
