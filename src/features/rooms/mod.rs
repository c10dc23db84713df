pub mod model;
pub mod upload;

use crate::error::ApiError;
use crate::io::image_basename;
use crate::AppState;
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::JsonRejection,
        DefaultBodyLimit, Path, State,
    },
    http::HeaderMap,
    routing::{get, post, put},
    Json, Router,
};
use model::{ImageUrlStyle, JsonRoom, RoomPricePayload};
use serde_json::{json, Value};
use tracing::info;
use upload::{accept_multipart, create_room_with_image, read_room_form};

pub fn rooms_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_rooms_handler)
                .post(create_room_handler)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/upload",
            post(upload_room_handler).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/{id}",
            put(update_room_price_handler).delete(delete_room_handler),
        )
}

async fn list_rooms_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonRoom>>, ApiError> {
    let rooms = state
        .rooms
        .list_rooms()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch rooms", e))?;

    Ok(Json(rooms.into_iter().map(JsonRoom::from).collect()))
}

// stores the image path relative to this server: "/images/<file>"
async fn create_room_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, ApiError> {
    let limit = state.config.max_upload_bytes;
    let multipart = accept_multipart(&headers, multipart, limit)?;
    let form = read_room_form(multipart, limit).await?;
    create_room_with_image(&state, form, ImageUrlStyle::Relative).await?;

    Ok(Json(json!({ "message": "Room created" })))
}

// stores the full public url of the image and hands it back
async fn upload_room_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, ApiError> {
    let limit = state.config.max_upload_bytes;
    let multipart = accept_multipart(&headers, multipart, limit)?;
    let form = read_room_form(multipart, limit).await?;
    let image_url = create_room_with_image(&state, form, ImageUrlStyle::Absolute).await?;

    Ok(Json(json!({ "message": "Room created", "image_url": image_url })))
}

async fn update_room_price_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<RoomPricePayload>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid JSON"))?;

    let updated = state
        .rooms
        .update_room_price(id, payload.price)
        .await
        .map_err(|e| ApiError::internal("Failed to update room price", e))?;

    if !updated {
        return Err(ApiError::not_found("Room not found"));
    }

    info!("Room {} now costs {}", id, payload.price);
    Ok(Json(json!({ "message": "Room price updated" })))
}

async fn delete_room_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let image_url = state
        .rooms
        .get_room_image_url(id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch room image", e))?
        .ok_or_else(|| ApiError::not_found("Room not found"))?;

    state
        .rooms
        .delete_room(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete room", e))?;

    info!("Deleted room {}", id);

    // the stored url may be relative or absolute, only its last segment names the file
    if let Some(filename) = image_basename(&image_url) {
        state.images.remove(&filename).await.map_err(|e| {
            ApiError::internal("Room deleted, but failed to delete image", e)
        })?;
    }

    Ok(Json(json!({ "message": "Room and image deleted" })))
}
