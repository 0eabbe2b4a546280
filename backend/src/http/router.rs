//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing).

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::artist_map::ARTIST_MAP_PATH;
use crate::routes::dashboard::DASHBOARD_PATH;
use crate::routes::options::OPTIONS_PATH;
use crate::routes::session::LAST_CLICKED_PATH;
use crate::routes::summary::VENUE_SUMMARY_PATH;
use crate::routes::venue_map::VENUE_MAP_PATH;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(OPTIONS_PATH, get(handlers::get_options))
        .route(VENUE_MAP_PATH, post(handlers::post_venue_map))
        .route(VENUE_SUMMARY_PATH, post(handlers::post_venue_summary))
        .route(ARTIST_MAP_PATH, post(handlers::post_artist_map))
        .route(DASHBOARD_PATH, post(handlers::post_dashboard))
        .route(
            LAST_CLICKED_PATH,
            get(handlers::get_last_clicked).post(handlers::post_last_clicked),
        );

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::MapSettings;
    use crate::db::{DatasetCache, RepositoryFactory};

    #[test]
    fn test_router_creation() {
        let cache = Arc::new(DatasetCache::new(RepositoryFactory::create_local()));
        let _router = create_router(AppState::new(cache, MapSettings::default()));
    }
}
