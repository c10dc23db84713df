use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct HotelConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub upload_dir: PathBuf,
    pub public_base_url: String,
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl HotelConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // split out from from_env so tests don't have to mutate the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://hotel.db".to_string());

        let max_connections = match lookup("MAX_CONNECTIONS") {
            Some(val) => val
                .parse::<u32>()
                .with_context(|| format!("MAX_CONNECTIONS is not a number: {}", val))?,
            None => 5,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3001".to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a valid socket address")?;

        let upload_dir =
            PathBuf::from(lookup("UPLOAD_DIR").unwrap_or_else(|| "./public/images".to_string()));

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3001".to_string())
            .trim_end_matches('/')
            .to_string();

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(val) => val
                .parse::<usize>()
                .with_context(|| format!("MAX_UPLOAD_BYTES is not a number: {}", val))?,
            None => 10 * 1024 * 1024,
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            upload_dir,
            public_base_url,
            allowed_origins,
            max_upload_bytes,
        })
    }
}
