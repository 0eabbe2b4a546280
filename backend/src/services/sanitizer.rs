//! Coordinate sanitization.
//!
//! Turns filtered raw rows into typed records. A row is dropped when a displayed field is
//! missing, when a coordinate is not a finite number, when a coordinate lies outside the
//! globe, or when an artist's location number is not an integer. Dropped rows are reported
//! in a [`SanitizeReport`] and logged, never silently discarded.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info};

use crate::models::{artist, venue, ArtistLocationRecord, ArtistLocationRow, VenueRecord, VenueRow};
use crate::parsing::csv_parser::parse_integral;
use crate::routes::map::RejectionStats;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Why a row was dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    MissingField(&'static str),
    NonNumericCoordinate { field: &'static str, value: String },
    CoordinateOutOfRange { field: &'static str, value: f64 },
    InvalidLocationNumber(String),
}

impl RejectionReason {
    /// Stable identifier used when counting rejections.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::NonNumericCoordinate { .. } => "non_numeric_coordinate",
            Self::CoordinateOutOfRange { .. } => "coordinate_out_of_range",
            Self::InvalidLocationNumber(_) => "invalid_location_number",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing {}", field),
            Self::NonNumericCoordinate { field, value } => {
                write!(f, "{} '{}' is not a number", field, value)
            }
            Self::CoordinateOutOfRange { field, value } => {
                write!(f, "{} {} is out of range", field, value)
            }
            Self::InvalidLocationNumber(value) => {
                write!(f, "location number '{}' is not an integer", value)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// Zero-based data row index in the source sheet.
    pub row: usize,
    pub reason: RejectionReason,
}

/// Records that passed sanitization plus the rows that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeReport<T> {
    pub records: Vec<T>,
    pub rejected: Vec<RejectedRow>,
}

impl<T> Default for SanitizeReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> SanitizeReport<T> {
    pub fn stats(&self) -> RejectionStats {
        let mut reasons = BTreeMap::new();
        for rejected in &self.rejected {
            *reasons.entry(rejected.reason.kind().to_string()).or_insert(0) += 1;
        }
        RejectionStats {
            rejected_rows: self.rejected.len(),
            reasons,
        }
    }

    fn push(&mut self, row: usize, outcome: Result<T, RejectionReason>, dataset: &str) {
        match outcome {
            Ok(record) => self.records.push(record),
            Err(reason) => {
                debug!(dataset, row, %reason, "row dropped");
                self.rejected.push(RejectedRow { row, reason });
            }
        }
    }

    fn log_summary(&self, dataset: &str) {
        if !self.rejected.is_empty() {
            info!(
                dataset,
                accepted = self.records.len(),
                rejected = self.rejected.len(),
                "sanitization dropped rows"
            );
        }
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, RejectionReason> {
    value.as_deref().ok_or(RejectionReason::MissingField(field))
}

/// Coerce raw coordinate text to a finite number within `[-bound, bound]`.
pub fn coerce_coordinate(field: &'static str, raw: &str, bound: f64) -> Result<f64, RejectionReason> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RejectionReason::NonNumericCoordinate {
            field,
            value: raw.to_string(),
        })?;

    if value.abs() > bound {
        return Err(RejectionReason::CoordinateOutOfRange { field, value });
    }
    Ok(value)
}

/// Sanitize one venue row.
pub fn sanitize_venue(row: &VenueRow) -> Result<VenueRecord, RejectionReason> {
    // Every displayed field must be present before any coercion happens.
    let city = required(&row.city, venue::columns::CITY)?;
    let name = required(&row.venue, venue::columns::VENUE)?;
    let raw_lat = required(&row.latitude, venue::columns::LATITUDE)?;
    let raw_lon = required(&row.longitude, venue::columns::LONGITUDE)?;
    let start_year = row
        .start_year
        .ok_or(RejectionReason::MissingField(venue::columns::START_YEAR))?;
    let end_year = row
        .end_year
        .ok_or(RejectionReason::MissingField(venue::columns::END_YEAR))?;

    let latitude = coerce_coordinate(venue::columns::LATITUDE, raw_lat, MAX_LATITUDE)?;
    let longitude = coerce_coordinate(venue::columns::LONGITUDE, raw_lon, MAX_LONGITUDE)?;

    Ok(VenueRecord {
        row: row.row,
        city: city.to_string(),
        venue: name.to_string(),
        latitude,
        longitude,
        start_year,
        end_year,
        location: row.field(venue::columns::LOCATION).map(str::to_string),
    })
}

/// Sanitize one artist location row.
pub fn sanitize_artist_location(
    row: &ArtistLocationRow,
) -> Result<ArtistLocationRecord, RejectionReason> {
    let name = required(&row.name, artist::columns::NAME)?;
    let raw_number = required(&row.location_number, artist::columns::LOCATION_NUMBER)?;
    let raw_lat = required(&row.latitude, artist::columns::LATITUDE)?;
    let raw_lon = required(&row.longitude, artist::columns::LONGITUDE)?;
    let city = required(&row.city, artist::columns::CITY)?;
    let birthday = required(&row.birthday, artist::columns::BIRTHDAY)?;
    let instrument = required(&row.instrument, artist::columns::INSTRUMENT)?;
    let overview = required(&row.overview, artist::columns::OVERVIEW)?;
    let article_link = required(&row.article_link, artist::columns::ARTICLE_LINK)?;

    let latitude = coerce_coordinate(artist::columns::LATITUDE, raw_lat, MAX_LATITUDE)?;
    let longitude = coerce_coordinate(artist::columns::LONGITUDE, raw_lon, MAX_LONGITUDE)?;
    let location_number = parse_integral(raw_number)
        .ok_or_else(|| RejectionReason::InvalidLocationNumber(raw_number.to_string()))?;

    Ok(ArtistLocationRecord {
        row: row.row,
        name: name.to_string(),
        location_number,
        latitude,
        longitude,
        city: city.to_string(),
        birthday: birthday.to_string(),
        instrument: instrument.to_string(),
        overview: overview.to_string(),
        article_link: article_link.to_string(),
    })
}

pub fn sanitize_venues<'a, I>(rows: I) -> SanitizeReport<VenueRecord>
where
    I: IntoIterator<Item = &'a VenueRow>,
{
    let mut report = SanitizeReport::default();
    for row in rows {
        report.push(row.row, sanitize_venue(row), "venues");
    }
    report.log_summary("venues");
    report
}

pub fn sanitize_artist_locations<'a, I>(rows: I) -> SanitizeReport<ArtistLocationRecord>
where
    I: IntoIterator<Item = &'a ArtistLocationRow>,
{
    let mut report = SanitizeReport::default();
    for row in rows {
        report.push(row.row, sanitize_artist_location(row), "artists");
    }
    report.log_summary("artists");
    report
}
