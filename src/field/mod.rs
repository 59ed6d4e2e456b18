//! Adapters between persisted text columns and in-memory values.

mod address_field;
mod geo_location_field;

use crate::domain::GeoCoordinateError;
pub use address_field::AddressField;
pub use geo_location_field::{GeoLocationField, MAX_LENGTH};
use thiserror::Error;

/// Validation failures reported when cleaning user input for a field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error(transparent)]
    Invalid(#[from] GeoCoordinateError),
    #[error("this field cannot be blank")]
    Blank,
    #[error("ensure this value has at most {max_length} characters (it has {length})")]
    TooLong { max_length: usize, length: usize },
}

fn check_length(raw: &str, max_length: usize) -> Result<(), FieldError> {
    let length = raw.chars().count();
    if length > max_length {
        Err(FieldError::TooLong { max_length, length })
    } else {
        Ok(())
    }
}
