//! Artist career map rendering.
//!
//! Each selected artist gets one color from a fixed palette, chosen by the artist's position
//! in the selection list. Consecutive residences are joined by straight segments.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ArtistLocationRecord;
use crate::routes::artist_map::{ArtistMapData, ArtistPath};
use crate::routes::map::{CircleMarker, LatLng, MapViewport, PolylineSegment, RejectionStats};
use crate::services::popup::popup_html;
use crate::services::venue_map::MARKER_FILL_OPACITY;

pub const ARTIST_MAP_CENTER: LatLng = LatLng {
    lat: 32.9897,
    lng: -112.6655,
};
pub const ARTIST_MAP_ZOOM: f64 = 3.4;

pub const ARTIST_PALETTE: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "purple"];

pub const ARTIST_MARKER_RADIUS: f64 = 6.0;
pub const ARTIST_LINE_WEIGHT: f64 = 3.0;
pub const ARTIST_POPUP_MAX_WIDTH: u32 = 500;

pub const ARTIST_MAP_TITLE: &str = "Map of Artist Careers:";

/// Order in which an artist's residences are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtistPathOrder {
    /// Sheet row order.
    #[default]
    Source,
    /// Ascending location number; ties keep sheet order.
    LocationNumber,
}

/// Palette color for the artist at `selection_index`. Wraps past the palette length.
pub fn palette_color(selection_index: usize) -> &'static str {
    ARTIST_PALETTE[selection_index % ARTIST_PALETTE.len()]
}

pub fn artist_map_subtitle(artists: &[String]) -> String {
    if artists.is_empty() {
        "No Selected Artists".to_string()
    } else {
        format!("Showing Career(s) of {}", artists.join(", "))
    }
}

/// Partition records by exact artist name, one group per selected artist in selection order.
///
/// Selected artists with no records get an empty group.
pub fn group_by_artist<'a>(
    records: &'a [ArtistLocationRecord],
    artists: &[String],
    order: ArtistPathOrder,
) -> Vec<(String, Vec<&'a ArtistLocationRecord>)> {
    let mut by_name: HashMap<&str, Vec<&'a ArtistLocationRecord>> = HashMap::new();
    for record in records {
        by_name.entry(record.name.as_str()).or_default().push(record);
    }

    artists
        .iter()
        .map(|name| {
            let mut group = by_name.get(name.as_str()).cloned().unwrap_or_default();
            if order == ArtistPathOrder::LocationNumber {
                group.sort_by_key(|r| r.location_number);
            }
            (name.clone(), group)
        })
        .collect()
}

fn artist_marker(record: &ArtistLocationRecord, color: &str) -> CircleMarker {
    CircleMarker {
        position: LatLng::new(record.latitude, record.longitude),
        radius: ARTIST_MARKER_RADIUS,
        color: color.to_string(),
        fill: true,
        fill_opacity: MARKER_FILL_OPACITY,
        tooltip: Some(record.name.clone()),
        popup_html: popup_html(&record.display_fields()),
        popup_max_width: ARTIST_POPUP_MAX_WIDTH,
        interactive: false,
    }
}

/// Markers and connecting segments for one artist.
pub fn build_artist_path(
    name: &str,
    selection_index: usize,
    locations: &[&ArtistLocationRecord],
) -> ArtistPath {
    let color = palette_color(selection_index);

    let segments = locations
        .windows(2)
        .map(|pair| PolylineSegment {
            from: LatLng::new(pair[0].latitude, pair[0].longitude),
            to: LatLng::new(pair[1].latitude, pair[1].longitude),
            color: color.to_string(),
            weight: ARTIST_LINE_WEIGHT,
            tooltip: Some(name.to_string()),
        })
        .collect();

    ArtistPath {
        name: name.to_string(),
        selection_index,
        color: color.to_string(),
        markers: locations.iter().map(|r| artist_marker(r, color)).collect(),
        segments,
    }
}

/// Render sanitized artist locations for the selected artists.
pub fn render_artist_map(
    records: &[ArtistLocationRecord],
    artists: &[String],
    order: ArtistPathOrder,
    rejections: RejectionStats,
) -> ArtistMapData {
    let paths: Vec<ArtistPath> = group_by_artist(records, artists, order)
        .iter()
        .enumerate()
        .map(|(index, (name, locations))| build_artist_path(name, index, locations))
        .collect();

    let marker_count = paths.iter().map(|p| p.markers.len()).sum();
    let segment_count = paths.iter().map(|p| p.segments.len()).sum();
    debug!(artists = paths.len(), marker_count, segment_count, "rendered artist map");

    ArtistMapData {
        title: ARTIST_MAP_TITLE.to_string(),
        subtitle: artist_map_subtitle(artists),
        viewport: MapViewport {
            center: ARTIST_MAP_CENTER,
            zoom: ARTIST_MAP_ZOOM,
        },
        paths,
        click_popup: true,
        marker_count,
        segment_count,
        rejections,
    }
}
