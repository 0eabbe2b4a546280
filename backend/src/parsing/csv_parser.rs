use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{artist, venue, ArtistLocationRow, VenueRow};

/// Header positions of a CSV table, keyed by trimmed header text.
struct HeaderIndex {
    headers: Vec<String>,
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    fn from_record(record: &csv::StringRecord) -> Self {
        let headers: Vec<String> = record
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        let mut positions = HashMap::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            // First occurrence wins for repeated headers
            positions.entry(header.clone()).or_insert(idx);
        }
        Self { headers, positions }
    }

    fn require(&self, header: &str) -> RepositoryResult<usize> {
        self.positions.get(header).copied().ok_or_else(|| {
            RepositoryError::malformed_with_context(
                format!("missing required column '{}'", header),
                ErrorContext::default().with_details(format!("found={:?}", self.headers)),
            )
        })
    }
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Cell text at `idx`, or `None` when the cell is absent or blank.
fn cell(record: &csv::StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse integer cell text. Integral float text such as `1945.0` is accepted because sheet
/// exports widen integer columns that contain blanks.
pub fn parse_integral(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    let value = text.parse::<f64>().ok()?;
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value <= i64::MAX as f64
    {
        Some(value as i64)
    } else {
        None
    }
}

/// Parse a year cell.
pub fn parse_year(text: &str) -> Option<i32> {
    parse_integral(text).and_then(|v| i32::try_from(v).ok())
}

/// Decode the venue sheet.
///
/// Required headers: `city`, `venue`, `latitude`, `longitude`, `start year`, `end year`.
/// Every other header is kept per row as a free-form field.
pub fn parse_venues_csv<R: Read>(input: R) -> RepositoryResult<Vec<VenueRow>> {
    let mut rdr = reader(input);
    let index = HeaderIndex::from_record(rdr.headers()?);

    let city = index.require(venue::columns::CITY)?;
    let name = index.require(venue::columns::VENUE)?;
    let lat = index.require(venue::columns::LATITUDE)?;
    let lon = index.require(venue::columns::LONGITUDE)?;
    let start = index.require(venue::columns::START_YEAR)?;
    let end = index.require(venue::columns::END_YEAR)?;
    let known = [city, name, lat, lon, start, end];

    let mut rows = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;

        let extra = index
            .headers
            .iter()
            .enumerate()
            .filter(|(idx, header)| !known.contains(idx) && !header.is_empty())
            .filter_map(|(idx, header)| cell(&record, idx).map(|v| (header.clone(), v)))
            .collect();

        rows.push(VenueRow {
            row,
            city: cell(&record, city),
            venue: cell(&record, name),
            latitude: cell(&record, lat),
            longitude: cell(&record, lon),
            start_year: cell(&record, start).as_deref().and_then(parse_year),
            end_year: cell(&record, end).as_deref().and_then(parse_year),
            extra,
        });
    }

    debug!(rows = rows.len(), "decoded venue sheet");
    Ok(rows)
}

/// Decode the artist location sheet. All nine artist headers are required.
pub fn parse_artist_locations_csv<R: Read>(input: R) -> RepositoryResult<Vec<ArtistLocationRow>> {
    let mut rdr = reader(input);
    let index = HeaderIndex::from_record(rdr.headers()?);

    let name = index.require(artist::columns::NAME)?;
    let location_number = index.require(artist::columns::LOCATION_NUMBER)?;
    let lat = index.require(artist::columns::LATITUDE)?;
    let lon = index.require(artist::columns::LONGITUDE)?;
    let city = index.require(artist::columns::CITY)?;
    let birthday = index.require(artist::columns::BIRTHDAY)?;
    let instrument = index.require(artist::columns::INSTRUMENT)?;
    let overview = index.require(artist::columns::OVERVIEW)?;
    let article_link = index.require(artist::columns::ARTICLE_LINK)?;

    let mut rows = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        rows.push(ArtistLocationRow {
            row,
            name: cell(&record, name),
            location_number: cell(&record, location_number),
            latitude: cell(&record, lat),
            longitude: cell(&record, lon),
            city: cell(&record, city),
            birthday: cell(&record, birthday),
            instrument: cell(&record, instrument),
            overview: cell(&record, overview),
            article_link: cell(&record, article_link),
        });
    }

    debug!(rows = rows.len(), "decoded artist sheet");
    Ok(rows)
}

/// Decode a venue sheet stored on disk.
pub fn parse_venues_file(path: &Path) -> RepositoryResult<Vec<VenueRow>> {
    let file = open(path, "venues")?;
    parse_venues_csv(file).map_err(|e| e.within("parse_venues_file", "venues"))
}

/// Decode an artist location sheet stored on disk.
pub fn parse_artist_locations_file(path: &Path) -> RepositoryResult<Vec<ArtistLocationRow>> {
    let file = open(path, "artists")?;
    parse_artist_locations_csv(file)
        .map_err(|e| e.within("parse_artist_locations_file", "artists"))
}

fn open(path: &Path, dataset: &str) -> RepositoryResult<std::fs::File> {
    std::fs::File::open(path).map_err(|e| {
        RepositoryError::connection_with_context(
            format!("failed to open CSV file: {}", e),
            ErrorContext::new("open")
                .with_dataset(dataset)
                .with_source(path.display()),
        )
    })
}
