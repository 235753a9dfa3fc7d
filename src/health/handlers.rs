use crate::app_context::AppContext;
use crate::health::responses::{HealthCheckResponse, StorageStatus, TestEndpointResponse};
use axum::extract::State;
use axum::response::Json;
use chrono::{SecondsFormat, Utc};

/// Reports what the last storage call observed, without touching storage itself.
#[axum::debug_handler]
pub async fn healthcheck(State(app_context): State<AppContext>) -> Json<HealthCheckResponse> {
    let storage = if app_context.locations.is_available() {
        StorageStatus::Available
    } else {
        StorageStatus::Unavailable
    };
    Json(HealthCheckResponse {
        error: false,
        storage,
    })
}

pub async fn test() -> Json<TestEndpointResponse> {
    Json(TestEndpointResponse {
        message: String::from("Test endpoint is working!"),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
