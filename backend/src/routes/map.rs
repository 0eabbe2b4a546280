//! Map primitives shared by the venue and artist views.
//!
//! These mirror what a Leaflet client needs to draw circle markers and polylines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Initial view of a map.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub center: LatLng,
    pub zoom: f64,
}

/// Circle marker with popup and tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub position: LatLng,
    pub radius: f64,
    pub color: String,
    pub fill: bool,
    pub fill_opacity: f64,
    pub tooltip: Option<String>,
    /// Pre-rendered, escaped HTML body of the popup
    pub popup_html: String,
    pub popup_max_width: u32,
    /// Whether clicking the marker should raise an application event
    pub interactive: bool,
}

/// Straight line between two consecutive locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylineSegment {
    pub from: LatLng,
    pub to: LatLng,
    pub color: String,
    pub weight: f64,
    pub tooltip: Option<String>,
}

/// Rows dropped by sanitization, counted per reason kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectionStats {
    pub rejected_rows: usize,
    pub reasons: BTreeMap<String, usize>,
}
