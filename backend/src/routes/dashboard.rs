use serde::{Deserialize, Serialize};

use super::artist_map::ArtistMapData;
use super::summary::VenueSummary;
use super::venue_map::VenueMapData;
use crate::models::YearRange;

/// Sidebar state posted by the client.
///
/// An omitted field takes the control's initial value: the full slider range, every city,
/// every artist. An explicit empty list selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub years: Option<YearRange>,
    #[serde(default)]
    pub cities: Option<Vec<String>>,
    #[serde(default)]
    pub artists: Option<Vec<String>>,
}

/// Everything the page shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub venue_map: VenueMapData,
    pub venue_summary: VenueSummary,
    pub artist_map: ArtistMapData,
}

/// Route path for the combined view.
pub const DASHBOARD_PATH: &str = "/dashboard";
