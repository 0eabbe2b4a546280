use serde::{Deserialize, Serialize};

/// Column headers of the artist sheet, in popup order.
pub mod columns {
    pub const NAME: &str = "name";
    pub const LOCATION_NUMBER: &str = "location number";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const CITY: &str = "city";
    pub const BIRTHDAY: &str = "birthday";
    pub const INSTRUMENT: &str = "instrument";
    pub const OVERVIEW: &str = "overview";
    pub const ARTICLE_LINK: &str = "article link";

    pub const DISPLAYED: [&str; 9] = [
        NAME,
        LOCATION_NUMBER,
        LATITUDE,
        LONGITUDE,
        CITY,
        BIRTHDAY,
        INSTRUMENT,
        OVERVIEW,
        ARTICLE_LINK,
    ];
}

/// One residence of an artist as decoded from the sheet. Missing cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistLocationRow {
    pub row: usize,
    pub name: Option<String>,
    pub location_number: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub city: Option<String>,
    pub birthday: Option<String>,
    pub instrument: Option<String>,
    pub overview: Option<String>,
    pub article_link: Option<String>,
}

/// A sanitized artist location.
///
/// `location_number` is the position of this residence within the artist's career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistLocationRecord {
    pub row: usize,
    pub name: String,
    pub location_number: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub birthday: String,
    pub instrument: String,
    pub overview: String,
    pub article_link: String,
}

impl ArtistLocationRecord {
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (columns::NAME, self.name.clone()),
            (columns::LOCATION_NUMBER, self.location_number.to_string()),
            (columns::LATITUDE, self.latitude.to_string()),
            (columns::LONGITUDE, self.longitude.to_string()),
            (columns::CITY, self.city.clone()),
            (columns::BIRTHDAY, self.birthday.clone()),
            (columns::INSTRUMENT, self.instrument.clone()),
            (columns::OVERVIEW, self.overview.clone()),
            (columns::ARTICLE_LINK, self.article_link.clone()),
        ]
    }
}
