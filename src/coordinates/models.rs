use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::ops::RangeInclusive;

/// A latitude/longitude pair that passed validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Latitude,
    Longitude,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Latitude, Field::Longitude];

    pub fn name(self) -> &'static str {
        match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
        }
    }

    pub fn bounds(self) -> RangeInclusive<f64> {
        match self {
            Field::Latitude => -90.0..=90.0,
            Field::Longitude => -180.0..=180.0,
        }
    }

    /// NaN and infinities never pass, whatever the bounds are.
    pub fn accepts(self, value: f64) -> bool {
        value.is_finite() && self.bounds().contains(&value)
    }

    pub fn join(fields: &[Field]) -> String {
        fields
            .iter()
            .map(|field| field.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded `/send-location` body before any field checks.
///
/// Field values are kept as raw JSON so that rejected input can be echoed back exactly as it was
/// submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationInput {
    payload: Map<String, Value>,
}

impl LocationInput {
    /// Returns `None` if the body is not a JSON object.
    pub fn from_body(body: Value) -> Option<Self> {
        match body {
            Value::Object(payload) => Some(Self { payload }),
            _ => None,
        }
    }

    /// A field holding JSON `null` counts as absent.
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.payload
            .get(field.name())
            .filter(|value| !value.is_null())
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.payload.clone())
    }
}
