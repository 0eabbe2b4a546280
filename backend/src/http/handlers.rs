//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service layer. Every
//! render request runs the full pipeline against the cached datasets.

use axum::{extract::State, response::Html, Json};
use tracing::debug;

use super::dto::{
    ArtistMapData, ClickedPoint, DashboardView, FilterOptions, HealthResponse, SelectionRequest,
    VenueMapData, VenueSummary,
};
use super::error::AppError;
use super::page::INDEX_HTML;
use super::state::AppState;
use crate::db::Datasets;
use crate::models::FilterSelection;
use crate::services;
use crate::services::sanitizer::{MAX_LATITUDE, MAX_LONGITUDE};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

async fn load_selection(
    state: &AppState,
    request: SelectionRequest,
) -> Result<(Datasets, FilterSelection), AppError> {
    let datasets = state.cache.datasets().await?;
    let selection = services::resolve_selection(request, &datasets, &state.map);
    debug!(
        years = %selection.year_range,
        cities = selection.cities.len(),
        artists = selection.artists.len(),
        "selection resolved"
    );
    Ok((datasets, selection))
}

// =============================================================================
// Page and health
// =============================================================================

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
///
/// Reports where the datasets come from. Does not trigger a load.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let loaded = if state.cache.is_loaded() {
        "loaded"
    } else {
        "not loaded"
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        data_source: format!("{} ({})", state.cache.describe(), loaded),
    }))
}

// =============================================================================
// Map endpoints
// =============================================================================

/// GET /v1/options
///
/// Slider bounds and every selectable city and artist.
pub async fn get_options(State(state): State<AppState>) -> HandlerResult<FilterOptions> {
    let datasets = state.cache.datasets().await?;
    Ok(Json(services::filter_options(&datasets, &state.map)))
}

/// POST /v1/venue-map
pub async fn post_venue_map(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<VenueMapData> {
    let (datasets, selection) = load_selection(&state, request).await?;
    Ok(Json(services::build_venue_map(&datasets, &selection)))
}

/// POST /v1/venue-summary
pub async fn post_venue_summary(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<VenueSummary> {
    let (datasets, selection) = load_selection(&state, request).await?;
    Ok(Json(services::build_venue_summary(&datasets, &selection)))
}

/// POST /v1/artist-map
pub async fn post_artist_map(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<ArtistMapData> {
    let (datasets, selection) = load_selection(&state, request).await?;
    Ok(Json(services::build_artist_map(
        &datasets,
        &selection,
        state.map.artist_path_order,
    )))
}

/// POST /v1/dashboard
///
/// Both maps and the venue summary in one response.
pub async fn post_dashboard(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<DashboardView> {
    let (datasets, selection) = load_selection(&state, request).await?;
    Ok(Json(services::render_dashboard(
        &datasets, &selection, &state.map,
    )))
}

// =============================================================================
// Session
// =============================================================================

/// GET /v1/session/last-clicked
pub async fn get_last_clicked(State(state): State<AppState>) -> HandlerResult<Option<ClickedPoint>> {
    Ok(Json(state.last_click()))
}

/// POST /v1/session/last-clicked
pub async fn post_last_clicked(
    State(state): State<AppState>,
    Json(point): Json<ClickedPoint>,
) -> HandlerResult<ClickedPoint> {
    if !point.lat.is_finite() || point.lat.abs() > MAX_LATITUDE {
        return Err(AppError::BadRequest(format!("latitude {} is out of range", point.lat)));
    }
    if !point.lng.is_finite() || point.lng.abs() > MAX_LONGITUDE {
        return Err(AppError::BadRequest(format!("longitude {} is out of range", point.lng)));
    }

    state.record_click(point);
    Ok(Json(point))
}
