use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column headers of the venue sheet that are displayed on the map, in popup order.
pub mod columns {
    pub const CITY: &str = "city";
    pub const VENUE: &str = "venue";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const START_YEAR: &str = "start year";
    pub const END_YEAR: &str = "end year";

    /// Free-form column used as the marker tooltip when present.
    pub const LOCATION: &str = "location";

    pub const DISPLAYED: [&str; 6] = [CITY, VENUE, LATITUDE, LONGITUDE, START_YEAR, END_YEAR];
}

/// A venue row as decoded from the sheet. Missing cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueRow {
    /// Zero-based data row index in the source sheet.
    pub row: usize,
    pub city: Option<String>,
    pub venue: Option<String>,
    /// Raw cell text; coerced during sanitization.
    pub latitude: Option<String>,
    /// Raw cell text; coerced during sanitization.
    pub longitude: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    /// Every other column of the sheet, keyed by header.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl VenueRow {
    /// Look up a free-form descriptive field.
    pub fn field(&self, header: &str) -> Option<&str> {
        self.extra.get(header).map(String::as_str)
    }
}

/// A venue that survived sanitization and can be placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub row: usize,
    pub city: String,
    pub venue: String,
    pub latitude: f64,
    pub longitude: f64,
    pub start_year: i32,
    pub end_year: i32,
    /// Location label carried over from the free-form `location` column.
    pub location: Option<String>,
}

impl VenueRecord {
    /// `(label, value)` pairs for every displayed column, in sheet order.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (columns::CITY, self.city.clone()),
            (columns::VENUE, self.venue.clone()),
            (columns::LATITUDE, self.latitude.to_string()),
            (columns::LONGITUDE, self.longitude.to_string()),
            (columns::START_YEAR, self.start_year.to_string()),
            (columns::END_YEAR, self.end_year.to_string()),
        ]
    }
}
