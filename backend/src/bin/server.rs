//! Jazz Map HTTP Server Binary
//!
//! Loads configuration, builds the dataset repository and starts serving the map page and
//! its API.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the sheets from the published spreadsheet (default)
//! cargo run --bin jazz-map-server
//!
//! # Serve local CSV exports
//! JAZZ_MAP_CONFIG=jazz-map.example.toml cargo run --bin jazz-map-server
//! ```
//!
//! # Environment Variables
//!
//! - `JAZZ_MAP_CONFIG`: Path to a configuration file (default: search for `jazz-map.toml`)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use jazz_map::config::AppConfig;
use jazz_map::db::{DatasetCache, RepositoryFactory};
use jazz_map::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Jazz Map HTTP Server");

    let config = AppConfig::load()?.with_env_overrides();

    let repository = RepositoryFactory::create(&config.repository)?;
    let cache = Arc::new(DatasetCache::new(repository));
    info!(source = %cache.describe(), "repository initialized");

    let state = AppState::new(cache, config.map.clone());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Map page: http://{}/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
