//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    ArtistLocationRecord, ArtistLocationRow, FilterSelection, VenueRecord, VenueRow, YearRange,
};
pub use crate::routes::artist_map::ArtistMapData;
pub use crate::routes::artist_map::ArtistPath;
pub use crate::routes::dashboard::DashboardView;
pub use crate::routes::dashboard::SelectionRequest;
pub use crate::routes::map::CircleMarker;
pub use crate::routes::map::LatLng;
pub use crate::routes::map::MapViewport;
pub use crate::routes::map::PolylineSegment;
pub use crate::routes::map::RejectionStats;
pub use crate::routes::options::FilterOptions;
pub use crate::routes::session::ClickedPoint;
pub use crate::routes::session::MapKind;
pub use crate::routes::summary::CityCount;
pub use crate::routes::summary::VenueSummary;
pub use crate::routes::venue_map::VenueMapData;
