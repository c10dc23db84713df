pub mod model;

use crate::domain::NewBooking;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use model::{JsonBooking, NewBookingPayload};
use serde_json::{json, Value};
use tracing::info;

pub fn bookings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings_handler).post(create_booking_handler))
        .route("/{id}", delete(delete_booking_handler))
}

async fn list_bookings_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonBooking>>, ApiError> {
    let bookings = state
        .bookings
        .list_bookings()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch bookings", e))?;

    Ok(Json(bookings.into_iter().map(JsonBooking::from).collect()))
}

async fn create_booking_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewBookingPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid booking data"))?;

    let new_booking: NewBooking = payload.into();
    let id = state
        .bookings
        .create_booking(&new_booking)
        .await
        .map_err(|e| ApiError::internal("Failed to save booking", e))?;

    info!("Created booking #{}: {}", id, new_booking);
    Ok(StatusCode::CREATED)
}

async fn delete_booking_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state
        .bookings
        .delete_booking(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete booking", e))?;

    if !deleted {
        return Err(ApiError::not_found("Booking not found"));
    }

    info!("Deleted booking {}", id);
    Ok(Json(json!({ "message": "Booking deleted" })))
}
