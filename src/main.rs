use crate::config::HotelConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::{BookingRepository, FacilityRepository, RoomRepository, UserRepository};
use crate::io::local::LocalImageStore;
use crate::io::ImageStore;
use anyhow::Context;
use axum::{routing::get, Router};
use http::{header, HeaderValue, Method};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod features;
pub mod io;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub facilities: Arc<dyn FacilityRepository>,
    pub images: Arc<dyn ImageStore>,
    pub config: Arc<HotelConfig>,
}

impl AppState {
    // every table is served by the same sqlite repository
    pub fn from_sqlite(
        pool: Pool<Sqlite>,
        images: Arc<dyn ImageStore>,
        config: Arc<HotelConfig>,
    ) -> Self {
        let repo = Arc::new(SqliteRepository::new(pool));

        Self {
            users: repo.clone(),
            rooms: repo.clone(),
            bookings: repo.clone(),
            facilities: repo,
            images,
            config,
        }
    }
}

/// Composes every feature router together with static image serving, CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/", get(root_handler))
        .nest("/users", features::users::users_router())
        .nest("/rooms", features::rooms::rooms_router(config.max_upload_bytes))
        .nest("/bookings", features::bookings::bookings_router())
        .nest("/api/facilities", features::facilities::facilities_router())
        .nest_service("/images", ServeDir::new(&config.upload_dir))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Hotel API is up and running"
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hotel_server=debug,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // load centralized config
    let config = HotelConfig::from_env()?;
    let shared_config = Arc::new(config.clone());

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        info!("No database at {}, creating...", config.database_url);
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", config.database_url))?;
        info!("Created database at {}", config.database_url);
    }

    // connect to our db
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let images = LocalImageStore::new(config.upload_dir.clone()).await?;
    info!("Serving images from {}", images.root_path.display());

    let state = AppState::from_sqlite(pool, Arc::new(images), shared_config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
