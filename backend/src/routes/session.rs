use serde::{Deserialize, Serialize};

/// Which of the two maps a click came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapKind {
    Venue,
    Artist,
}

/// Most recent click on either map.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickedPoint {
    pub map: MapKind,
    pub lat: f64,
    pub lng: f64,
}

/// Route path for the last clicked point.
pub const LAST_CLICKED_PATH: &str = "/session/last-clicked";
