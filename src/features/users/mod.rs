pub mod model;

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use model::{JsonUser, NewUserPayload};
use tracing::info;

pub fn users_router() -> Router<AppState> {
    Router::new().route("/", get(list_users_handler).post(create_user_handler))
}

async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonUser>>, ApiError> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch users", e))?;

    Ok(Json(users.into_iter().map(JsonUser::from).collect()))
}

async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewUserPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid user data"))?;

    let id = state
        .users
        .create_user(&payload.into())
        .await
        .map_err(|e| ApiError::internal("Failed to save user", e))?;

    info!("Created user {}", id);
    Ok(StatusCode::CREATED)
}
