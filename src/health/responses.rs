use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    pub error: bool,
    pub storage: StorageStatus,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StorageStatus {
    Available,
    Unavailable,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TestEndpointResponse {
    pub message: String,
    pub timestamp: String,
}
