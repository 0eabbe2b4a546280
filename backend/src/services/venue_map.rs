//! Venue map rendering.
//!
//! Every sanitized venue becomes one purple circle marker. The map is titled after the
//! normalized year window and lists the selected cities.

use tracing::debug;

use crate::models::{VenueRecord, YearRange};
use crate::routes::map::{CircleMarker, LatLng, MapViewport, RejectionStats};
use crate::routes::venue_map::VenueMapData;
use crate::services::popup::popup_html;

pub const VENUE_MAP_CENTER: LatLng = LatLng {
    lat: 40.7161,
    lng: -89.2978,
};
pub const VENUE_MAP_ZOOM: f64 = 3.7;

pub const VENUE_MARKER_RADIUS: f64 = 6.0;
pub const VENUE_MARKER_COLOR: &str = "purple";
pub const MARKER_FILL_OPACITY: f64 = 0.7;
pub const VENUE_POPUP_MAX_WIDTH: u32 = 250;

pub fn venue_map_title(range: YearRange) -> String {
    format!("{} Map of Venues:", range)
}

pub fn venue_map_subtitle(cities: &[String]) -> String {
    if cities.is_empty() {
        "No Selected Cities".to_string()
    } else {
        format!("Showing Venues in {}", cities.join(", "))
    }
}

/// Build the marker for one venue.
pub fn venue_marker(record: &VenueRecord) -> CircleMarker {
    let tooltip = record
        .location
        .as_deref()
        .filter(|l| !l.trim().is_empty())
        .unwrap_or(&record.venue)
        .to_string();

    CircleMarker {
        position: LatLng::new(record.latitude, record.longitude),
        radius: VENUE_MARKER_RADIUS,
        color: VENUE_MARKER_COLOR.to_string(),
        fill: true,
        fill_opacity: MARKER_FILL_OPACITY,
        tooltip: Some(tooltip),
        popup_html: popup_html(&record.display_fields()),
        popup_max_width: VENUE_POPUP_MAX_WIDTH,
        interactive: false,
    }
}

/// Render sanitized venues for the given window and city selection.
pub fn render_venue_map(
    records: &[VenueRecord],
    range: YearRange,
    cities: &[String],
    rejections: RejectionStats,
) -> VenueMapData {
    let markers: Vec<CircleMarker> = records.iter().map(venue_marker).collect();
    debug!(markers = markers.len(), %range, "rendered venue map");

    VenueMapData {
        title: venue_map_title(range),
        subtitle: venue_map_subtitle(cities),
        viewport: MapViewport {
            center: VENUE_MAP_CENTER,
            zoom: VENUE_MAP_ZOOM,
        },
        total_count: markers.len(),
        markers,
        click_popup: true,
        rejections,
    }
}
