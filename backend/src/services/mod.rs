//! Service layer: the render pipeline.
//!
//! Services sit between the loaded datasets and the HTTP handlers. They filter rows by the
//! sidebar selection, sanitize coordinates and build the map and summary views. Nothing
//! here performs I/O.

pub mod artist_map;
pub mod dashboard;
pub mod filtering;
pub mod popup;
pub mod sanitizer;
pub mod summary;
pub mod venue_map;

#[cfg(test)]
mod artist_map_tests;

pub use artist_map::{render_artist_map, ArtistPathOrder};
pub use dashboard::{
    build_artist_map, build_venue_map, build_venue_summary, filter_options, render_dashboard,
    resolve_selection,
};
pub use filtering::filter_venues;
pub use sanitizer::{sanitize_artist_locations, sanitize_venues, SanitizeReport};
pub use summary::count_active_venues;
pub use venue_map::render_venue_map;
