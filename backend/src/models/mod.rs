//! Domain models for the two spreadsheet datasets and the user's filter selection.
//!
//! Each dataset has a raw `*Row` form, as decoded from CSV with every cell optional, and a
//! sanitized `*Record` form whose coordinates are guaranteed numeric.

pub mod artist;
pub mod selection;
pub mod venue;

pub use artist::{ArtistLocationRecord, ArtistLocationRow};
pub use selection::{FilterSelection, YearRange, YEAR_SLIDER_MAX, YEAR_SLIDER_MIN};
pub use venue::{VenueRecord, VenueRow};
