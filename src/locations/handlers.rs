use crate::app_context::AppContext;
use crate::coordinates::validation;
use crate::locations::errors::ApiError;
use crate::locations::extractors::LocationPayload;
use crate::locations::responses::SendLocationResponse;
use crate::storage::consts::RECENT_LOCATIONS_LIMIT;
use crate::storage::models::LocationRecord;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn send_location(
    State(app_context): State<AppContext>,
    LocationPayload(input): LocationPayload,
) -> Result<Json<SendLocationResponse>, ApiError> {
    let coordinate = validation::validate(&input)?;
    let location = app_context
        .locations
        .save(coordinate)
        .await
        .map_err(ApiError::Save)?;
    tracing::info!(
        task = "location_saved",
        identifier = %location.identifier,
        latitude = location.latitude,
        longitude = location.longitude,
    );
    Ok(Json(SendLocationResponse {
        message: String::from("Location saved successfully"),
        location,
    }))
}

#[axum::debug_handler]
pub async fn recent_locations(
    State(app_context): State<AppContext>,
) -> Result<Json<Vec<LocationRecord>>, ApiError> {
    let locations = app_context
        .locations
        .list_recent(RECENT_LOCATIONS_LIMIT)
        .await
        .map_err(ApiError::Fetch)?;
    Ok(Json(locations))
}
