//! Row filters driven by the sidebar selection.
//!
//! All matching is exact and case-sensitive. A row whose filtered field is missing never
//! matches.

use std::collections::HashSet;

use crate::models::{ArtistLocationRow, FilterSelection, VenueRow, YearRange};

/// Venues that were active at some point during `range`.
pub fn filter_venues_by_years<'a, I>(rows: I, range: YearRange) -> Vec<&'a VenueRow>
where
    I: IntoIterator<Item = &'a VenueRow>,
{
    rows.into_iter()
        .filter(|r| match (r.start_year, r.end_year) {
            (Some(start), Some(end)) => range.admits(start, end),
            _ => false,
        })
        .collect()
}

/// Venues located in one of `cities`.
pub fn filter_venues_by_cities<'a, I>(rows: I, cities: &[String]) -> Vec<&'a VenueRow>
where
    I: IntoIterator<Item = &'a VenueRow>,
{
    let wanted: HashSet<&str> = cities.iter().map(String::as_str).collect();
    rows.into_iter()
        .filter(|r| r.city.as_deref().is_some_and(|c| wanted.contains(c)))
        .collect()
}

/// Apply the year window, then the city selection.
pub fn filter_venues<'a>(rows: &'a [VenueRow], selection: &FilterSelection) -> Vec<&'a VenueRow> {
    let in_window = filter_venues_by_years(rows, selection.year_range);
    filter_venues_by_cities(in_window, &selection.cities)
}

/// Artist locations belonging to one of `artists`.
pub fn filter_artists_by_name<'a, I>(rows: I, artists: &[String]) -> Vec<&'a ArtistLocationRow>
where
    I: IntoIterator<Item = &'a ArtistLocationRow>,
{
    let wanted: HashSet<&str> = artists.iter().map(String::as_str).collect();
    rows.into_iter()
        .filter(|r| r.name.as_deref().is_some_and(|n| wanted.contains(n)))
        .collect()
}

/// Distinct values in first-appearance order, skipping missing cells.
pub fn unique_in_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .flatten()
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Every city in the venue sheet, in first-appearance order.
pub fn unique_cities(rows: &[VenueRow]) -> Vec<String> {
    unique_in_order(rows.iter().map(|r| r.city.as_deref()))
}

/// Every artist in the artist sheet, in first-appearance order.
pub fn unique_artists(rows: &[ArtistLocationRow]) -> Vec<String> {
    unique_in_order(rows.iter().map(|r| r.name.as_deref()))
}
