pub mod model;

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use model::{FacilitiesResponse, JsonFacility};

// facilities are maintained directly in the database, the api only reads them
pub fn facilities_router() -> Router<AppState> {
    Router::new().route("/", get(list_facilities_handler))
}

async fn list_facilities_handler(
    State(state): State<AppState>,
) -> Result<Json<FacilitiesResponse>, ApiError> {
    let facilities = state
        .facilities
        .list_facilities()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch facilities", e))?;

    Ok(Json(FacilitiesResponse {
        facilities: facilities.into_iter().map(JsonFacility::from).collect(),
    }))
}
