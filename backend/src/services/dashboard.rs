//! Full render pipeline: selection defaults, filtering, sanitization and rendering.
//!
//! Every function here is a pure transform of the loaded datasets and a selection.

use tracing::debug;

use crate::config::MapSettings;
use crate::db::Datasets;
use crate::models::{ArtistLocationRecord, FilterSelection, VenueRecord, YearRange};
use crate::routes::artist_map::ArtistMapData;
use crate::routes::dashboard::{DashboardView, SelectionRequest};
use crate::routes::options::FilterOptions;
use crate::routes::summary::VenueSummary;
use crate::routes::venue_map::VenueMapData;
use crate::services::artist_map::{render_artist_map, ArtistPathOrder};
use crate::services::filtering::{
    filter_artists_by_name, filter_venues, unique_artists, unique_cities,
};
use crate::services::sanitizer::{sanitize_artist_locations, sanitize_venues, SanitizeReport};
use crate::services::summary::count_active_venues;
use crate::services::venue_map::render_venue_map;

/// Slider bounds plus every selectable city and artist.
pub fn filter_options(datasets: &Datasets, settings: &MapSettings) -> FilterOptions {
    FilterOptions {
        year_min: settings.year_min,
        year_max: settings.year_max,
        cities: unique_cities(&datasets.venues),
        artists: unique_artists(&datasets.artists),
    }
}

/// Fill omitted request fields with the controls' initial values.
pub fn resolve_selection(
    request: SelectionRequest,
    datasets: &Datasets,
    settings: &MapSettings,
) -> FilterSelection {
    let years = request
        .years
        .unwrap_or_else(|| YearRange::new(settings.year_min, settings.year_max));
    let cities = request
        .cities
        .unwrap_or_else(|| unique_cities(&datasets.venues));
    let artists = request
        .artists
        .unwrap_or_else(|| unique_artists(&datasets.artists));

    FilterSelection::new(years, cities, artists)
}

/// Filtered, sanitized venues for a selection.
pub fn select_venues(datasets: &Datasets, selection: &FilterSelection) -> SanitizeReport<VenueRecord> {
    let filtered = filter_venues(&datasets.venues, selection);
    debug!(matched = filtered.len(), total = datasets.venues.len(), "venues filtered");
    sanitize_venues(filtered)
}

/// Filtered, sanitized artist locations for a selection.
pub fn select_artist_locations(
    datasets: &Datasets,
    selection: &FilterSelection,
) -> SanitizeReport<ArtistLocationRecord> {
    let filtered = filter_artists_by_name(datasets.artists.iter(), &selection.artists);
    debug!(matched = filtered.len(), total = datasets.artists.len(), "artist locations filtered");
    sanitize_artist_locations(filtered)
}

fn venue_map_from(report: &SanitizeReport<VenueRecord>, selection: &FilterSelection) -> VenueMapData {
    render_venue_map(
        &report.records,
        selection.year_range,
        &selection.cities,
        report.stats(),
    )
}

pub fn build_venue_map(datasets: &Datasets, selection: &FilterSelection) -> VenueMapData {
    venue_map_from(&select_venues(datasets, selection), selection)
}

pub fn build_venue_summary(datasets: &Datasets, selection: &FilterSelection) -> VenueSummary {
    count_active_venues(&select_venues(datasets, selection).records, &selection.cities)
}

pub fn build_artist_map(
    datasets: &Datasets,
    selection: &FilterSelection,
    order: ArtistPathOrder,
) -> ArtistMapData {
    let report = select_artist_locations(datasets, selection);
    render_artist_map(&report.records, &selection.artists, order, report.stats())
}

/// Both maps and the summary. Venues are filtered and sanitized once.
pub fn render_dashboard(
    datasets: &Datasets,
    selection: &FilterSelection,
    settings: &MapSettings,
) -> DashboardView {
    let venues = select_venues(datasets, selection);

    DashboardView {
        venue_map: venue_map_from(&venues, selection),
        venue_summary: count_active_venues(&venues.records, &selection.cities),
        artist_map: build_artist_map(datasets, selection, settings.artist_path_order),
    }
}
