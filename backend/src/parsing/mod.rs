//! Parsers for the spreadsheet CSV exports.
//!
//! - [`csv_parser`]: decode the venue and artist sheets into raw rows

pub mod csv_parser;


pub use csv_parser::{parse_artist_locations_csv, parse_venues_csv};
