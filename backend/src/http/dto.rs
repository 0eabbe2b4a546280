//! Data Transfer Objects for the HTTP API.
//!
//! Map and summary views are re-exported from the routes module since they already derive
//! Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    ArtistMapData, ClickedPoint, DashboardView, FilterOptions, MapKind, SelectionRequest,
    VenueMapData, VenueSummary,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Where the datasets come from, and whether they are loaded yet
    pub data_source: String,
}
