use crate::coordinates::models::Field;
use crate::coordinates::validation::ValidationError;
use crate::locations::responses::ErrorResponse;
use crate::storage::interface::StorageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("failed to read request body: {message}")]
    UnreadableBody { status: StatusCode, message: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to save a location: {0}")]
    Save(#[source] StorageError),
    #[error("failed to fetch locations: {0}")]
    Fetch(#[source] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UnreadableBody { status, .. } => *status,
            ApiError::Save(_) | ApiError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("Rejected a request: {self}");
        }
        let body = match self {
            ApiError::MalformedBody(message) => ErrorResponse {
                error: String::from("Invalid JSON"),
                missing: None,
                received: None,
                message: Some(message),
            },
            ApiError::UnreadableBody { message, .. } => ErrorResponse {
                error: String::from("Unreadable request body"),
                missing: None,
                received: None,
                message: Some(message),
            },
            ApiError::Validation(ValidationError::MissingField { missing, received }) => {
                ErrorResponse {
                    error: String::from("Missing required fields"),
                    missing: Some(missing),
                    received: Some(received),
                    message: None,
                }
            }
            ApiError::Validation(ValidationError::OutOfRange { field, received }) => {
                ErrorResponse {
                    error: match field {
                        Field::Latitude => String::from("Invalid latitude value"),
                        Field::Longitude => String::from("Invalid longitude value"),
                    },
                    missing: None,
                    received: Some(received),
                    message: None,
                }
            }
            ApiError::Save(err) => ErrorResponse {
                error: String::from("Server error"),
                missing: None,
                received: None,
                message: Some(err.to_string()),
            },
            ApiError::Fetch(err) => ErrorResponse {
                error: String::from("Error fetching locations"),
                missing: None,
                received: None,
                message: Some(err.to_string()),
            },
        };
        (status, Json(body)).into_response()
    }
}
