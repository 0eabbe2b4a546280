use serde::{Deserialize, Serialize};

use super::map::{CircleMarker, MapViewport, RejectionStats};

/// Venue map visualization data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueMapData {
    /// e.g. "1920-1950 Map of Venues:"
    pub title: String,
    /// e.g. "Showing Venues in Chicago, New York"
    pub subtitle: String,
    pub viewport: MapViewport,
    pub markers: Vec<CircleMarker>,
    /// Clicking anywhere on the map shows its latitude/longitude
    pub click_popup: bool,
    pub total_count: usize,
    pub rejections: RejectionStats,
}

/// Route path for the venue map.
pub const VENUE_MAP_PATH: &str = "/venue-map";
