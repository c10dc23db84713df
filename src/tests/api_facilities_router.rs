use crate::app;
use crate::config::HotelConfig;
use crate::io::local::LocalImageStore;
use crate::tests::mocks::{body_json, empty_request, json_request, setup_test_pool, test_config};
use crate::AppState;
use axum::http::StatusCode;
use std::sync::Arc;
use tower::ServiceExt;

// facilities only ever get read, so they're seeded with plain sql
#[tokio::test]
async fn test_list_facilities_wrapped() {
    let dir = tempfile::tempdir().unwrap();
    let pool = setup_test_pool().await;
    sqlx::query(
        "INSERT INTO facilities (name, description, image) VALUES ('Restaurant', 'Open 24 hours', '/images/restaurant.jpg')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let config: Arc<HotelConfig> = test_config(dir.path());
    let images = LocalImageStore::new(dir.path()).await.unwrap();
    let state = AppState::from_sqlite(pool, Arc::new(images), config);

    let response = app(state)
        .oneshot(empty_request("GET", "/api/facilities"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // the list lives under "facilities", not at the top level
    let facilities = json["facilities"].as_array().unwrap();
    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0]["name"], "Restaurant");
    assert_eq!(facilities[0]["description"], "Open 24 hours");
    assert_eq!(facilities[0]["image"], "/images/restaurant.jpg");
}

#[tokio::test]
async fn test_list_facilities_empty() {
    let dir = tempfile::tempdir().unwrap();
    let pool = setup_test_pool().await;
    let images = LocalImageStore::new(dir.path()).await.unwrap();
    let state = AppState::from_sqlite(pool, Arc::new(images), test_config(dir.path()));

    let response = app(state)
        .oneshot(empty_request("GET", "/api/facilities"))
        .await
        .unwrap();

    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "facilities": [] })
    );
}

// there is no way to write facilities through the api
#[tokio::test]
async fn test_facilities_are_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let pool = setup_test_pool().await;
    let images = LocalImageStore::new(dir.path()).await.unwrap();
    let state = AppState::from_sqlite(pool, Arc::new(images), test_config(dir.path()));

    let response = app(state)
        .oneshot(json_request(
            "POST",
            "/api/facilities",
            r#"{"name":"Gym"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
