use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::error::AppError;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataValidationError {
    #[error("Invalid Account: body of request contained bad or no data")]
    NotAnObject,
    #[error("Invalid Account: missing field '{0}'")]
    MissingField(&'static str),
}

impl From<DataValidationError> for AppError {
    fn from(error: DataValidationError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

/// Builds a payload from an already parsed JSON body.
pub trait FromPayload: Sized {
    fn deserialize(data: Value) -> Result<Self, DataValidationError>;
}

pub fn as_object(data: Value) -> Result<Map<String, Value>, DataValidationError> {
    match data {
        Value::Object(map) => Ok(map),
        _ => Err(DataValidationError::NotAnObject),
    }
}

/// Takes `key` out of `map`. Only presence is checked: strings are kept
/// verbatim, any other non-null value is kept as its JSON text.
pub fn required(
    map: &mut Map<String, Value>,
    key: &'static str,
) -> Result<String, DataValidationError> {
    match map.remove(key) {
        None | Some(Value::Null) => Err(DataValidationError::MissingField(key)),
        Some(Value::String(value)) => Ok(value),
        Some(value) => Ok(value.to_string()),
    }
}
