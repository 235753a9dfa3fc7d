use crate::coordinates::models::{Coordinate, Field, LocationInput};
use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", Field::join(.missing))]
    MissingField { missing: Vec<Field>, received: Value },
    #[error("invalid {field} value: {received}")]
    OutOfRange { field: Field, received: Value },
}

/// Turns a decoded body into a [`Coordinate`].
///
/// Missing fields are reported together, before any range check. After that latitude is checked
/// before longitude and the first violation wins.
pub fn validate(input: &LocationInput) -> Result<Coordinate, ValidationError> {
    match (input.get(Field::Latitude), input.get(Field::Longitude)) {
        (Some(latitude), Some(longitude)) => Ok(Coordinate {
            latitude: check(Field::Latitude, latitude)?,
            longitude: check(Field::Longitude, longitude)?,
        }),
        _ => Err(ValidationError::MissingField {
            missing: Field::ALL
                .into_iter()
                .filter(|field| input.get(*field).is_none())
                .collect(),
            received: input.to_value(),
        }),
    }
}

fn check(field: Field, raw: &Value) -> Result<f64, ValidationError> {
    // Only JSON numbers count, numeric-looking strings are rejected as-is.
    match raw.as_f64() {
        Some(value) if field.accepts(value) => Ok(value),
        _ => Err(ValidationError::OutOfRange {
            field,
            received: raw.clone(),
        }),
    }
}

impl Coordinate {
    /// Range-checks values that are already numeric, e.g. ones that never went through JSON.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        for (field, value) in [(Field::Latitude, latitude), (Field::Longitude, longitude)] {
            if !field.accepts(value) {
                return Err(ValidationError::OutOfRange {
                    field,
                    received: echo(value),
                });
            }
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

// JSON has no NaN or infinity, so those are echoed as their textual form.
fn echo(value: f64) -> Value {
    if value.is_finite() {
        Value::from(value)
    } else {
        Value::String(value.to_string())
    }
}
