use crate::health::responses::{HealthCheckResponse, StorageStatus, TestEndpointResponse};
use crate::http::tests::{test_server, test_server_with};
use crate::storage::tests::UnreachableStore;
use axum::http::StatusCode;
use chrono::DateTime;
use std::sync::Arc;

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        storage: StorageStatus::Available,
    });
}

#[tokio::test]
async fn test_health_check_after_storage_failure() {
    let server = test_server_with(Arc::new(UnreachableStore::default()));
    server
        .get("/locations")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        storage: StorageStatus::Unavailable,
    });
}

#[tokio::test]
async fn test_test_endpoint() {
    let server = test_server();

    let response = server.get("/test").await;

    response.assert_status_ok();
    let body = response.json::<TestEndpointResponse>();
    assert_eq!(body.message, "Test endpoint is working!");
    assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
}
