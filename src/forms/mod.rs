//! Form definitions backing the front-end routes and their conversion into
//! backend payloads.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

pub mod auth;
pub mod muebles;
pub mod ordenes;
pub mod variantes;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("field `{0}` must be an integer")]
    InvalidNumber(String),

    #[error("malformed form body: {0}")]
    Malformed(String),
}

/// Runs the `validator` rules declared on `form`.
pub(crate) fn validate_form<F: Validate>(form: &F) -> Result<(), FormError> {
    form.validate()?;
    Ok(())
}

/// Parses a whole-number form field, ignoring surrounding whitespace.
pub(crate) fn parse_int<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidNumber(field.to_string()))
}
