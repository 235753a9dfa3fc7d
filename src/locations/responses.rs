use crate::coordinates::models::Field;
use crate::storage::models::LocationRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SendLocationResponse {
    pub message: String,
    pub location: LocationRecord,
}

/// Body of every non-2xx response.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<Field>>,
    /// The offending input, echoed back as it was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
