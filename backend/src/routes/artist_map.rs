use serde::{Deserialize, Serialize};

use super::map::{CircleMarker, MapViewport, PolylineSegment, RejectionStats};

/// One artist's career drawn as markers joined by line segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistPath {
    pub name: String,
    /// Position in the selection list; decides the palette color
    pub selection_index: usize,
    pub color: String,
    pub markers: Vec<CircleMarker>,
    pub segments: Vec<PolylineSegment>,
}

/// Artist career map visualization data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistMapData {
    pub title: String,
    pub subtitle: String,
    pub viewport: MapViewport,
    pub paths: Vec<ArtistPath>,
    pub click_popup: bool,
    pub marker_count: usize,
    pub segment_count: usize,
    pub rejections: RejectionStats,
}

/// Route path for the artist map.
pub const ARTIST_MAP_PATH: &str = "/artist-map";
