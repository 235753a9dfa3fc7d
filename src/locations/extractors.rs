use crate::coordinates::models::LocationInput;
use crate::locations::errors::ApiError;
use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

/// `/send-location` body decoded into a [`LocationInput`].
///
/// Anything that is not a JSON object sent as `application/json` is rejected with
/// [`ApiError::MalformedBody`] before validation runs.
pub struct LocationPayload(pub LocationInput);

#[async_trait]
impl<S> FromRequest<S> for LocationPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(request, state)
            .await
            .map_err(|rejection| match rejection {
                // The body never arrived in full (too large, connection dropped), so it was
                // never parsed.
                JsonRejection::BytesRejection(_) => ApiError::UnreadableBody {
                    status: rejection.status(),
                    message: rejection.body_text(),
                },
                _ => ApiError::MalformedBody(rejection.body_text()),
            })?;
        LocationInput::from_body(body)
            .map(Self)
            .ok_or_else(|| ApiError::MalformedBody(String::from("Expected a JSON object.")))
    }
}
