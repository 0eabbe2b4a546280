//! End-to-end pipeline tests over the CSV fixtures, without HTTP.

mod support;

use jazz_map::api::{SelectionRequest, YearRange};
use jazz_map::models::FilterSelection;
use jazz_map::services::{
    build_artist_map, build_venue_map, build_venue_summary, filter_options, render_dashboard,
    resolve_selection, ArtistPathOrder,
};

use support::{fixture_cache, fixture_datasets, map_settings, names};

#[test]
fn test_options_cover_both_sheets() {
    let options = filter_options(&fixture_datasets(), &map_settings());
    assert_eq!(
        options.cities,
        names(&["New York", "Chicago", "Kansas City", "New Orleans"])
    );
    assert_eq!(
        options.artists,
        names(&["Louis Armstrong", "Charlie Parker", "Bix Beiderbecke"])
    );
    assert_eq!((options.year_min, options.year_max), (1900, 2000));
}

#[test]
fn test_venue_window_and_cities() {
    let datasets = fixture_datasets();
    let selection = FilterSelection::new(
        YearRange::new(1920, 1950),
        names(&["New York", "Chicago"]),
        vec![],
    );
    let map = build_venue_map(&datasets, &selection);

    let venues: Vec<&str> = map
        .markers
        .iter()
        .map(|m| m.tooltip.as_deref().unwrap_or_default())
        .collect();
    // Tooltips fall back to the venue name when the location cell is blank.
    assert_eq!(
        venues,
        vec!["Midtown", "Greenwich Village", "Bronzeville", "Green Mill"]
    );
    assert_eq!(map.rejections.rejected_rows, 1);
    assert_eq!(map.rejections.reasons.get("non_numeric_coordinate"), Some(&1));
    assert_eq!(map.subtitle, "Showing Venues in New York, Chicago");
}

#[test]
fn test_inverted_slider_matches_ordered_slider() {
    let datasets = fixture_datasets();
    let cities = names(&["New York", "Chicago", "New Orleans"]);
    let forward = FilterSelection::new(YearRange::new(1920, 1950), cities.clone(), vec![]);
    let backward = FilterSelection::new(YearRange::new(1950, 1920), cities, vec![]);

    assert_eq!(
        build_venue_map(&datasets, &forward),
        build_venue_map(&datasets, &backward)
    );
}

#[test]
fn test_venue_outside_window_is_excluded() {
    let datasets = fixture_datasets();
    let selection = FilterSelection::new(
        YearRange::new(1920, 1950),
        names(&["New Orleans"]),
        vec![],
    );
    assert!(build_venue_map(&datasets, &selection).markers.is_empty());

    let selection = FilterSelection::new(
        YearRange::new(1900, 1910),
        names(&["New Orleans"]),
        vec![],
    );
    assert_eq!(build_venue_map(&datasets, &selection).total_count, 1);
}

#[test]
fn test_summary_zero_count_city_does_not_shift_others() {
    let datasets = fixture_datasets();
    let selection = FilterSelection::new(
        YearRange::new(1920, 1950),
        names(&["New Orleans", "New York", "Chicago"]),
        vec![],
    );
    let summary = build_venue_summary(&datasets, &selection);

    let rows: Vec<(&str, usize)> = summary
        .counts
        .iter()
        .map(|c| (c.city.as_str(), c.count))
        .collect();
    assert_eq!(rows, vec![("New Orleans", 0), ("New York", 2), ("Chicago", 2)]);
    assert_eq!(summary.total, 4);
}

#[test]
fn test_artist_paths() {
    let datasets = fixture_datasets();
    let selection = resolve_selection(SelectionRequest::default(), &datasets, &map_settings());
    let map = build_artist_map(&datasets, &selection, ArtistPathOrder::Source);

    assert_eq!(map.paths.len(), 3);
    let summary: Vec<(&str, &str, usize, usize)> = map
        .paths
        .iter()
        .map(|p| (p.name.as_str(), p.color.as_str(), p.markers.len(), p.segments.len()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Louis Armstrong", "red", 3, 2),
            ("Charlie Parker", "orange", 2, 1),
            ("Bix Beiderbecke", "yellow", 0, 0),
        ]
    );
    assert_eq!(map.rejections.rejected_rows, 1);
    assert_eq!(map.subtitle, "Showing Career(s) of Louis Armstrong, Charlie Parker, Bix Beiderbecke");
}

#[test]
fn test_quoted_overview_survives_into_popup() {
    let datasets = fixture_datasets();
    let selection = FilterSelection::new(YearRange::default(), vec![], names(&["Louis Armstrong"]));
    let map = build_artist_map(&datasets, &selection, ArtistPathOrder::LocationNumber);
    assert!(map.paths[0].markers[2]
        .popup_html
        .contains("<b>overview:</b> Hot Five, Hot Seven"));
}

#[tokio::test]
async fn test_dashboard_through_cache_loads_once() {
    let cache = fixture_cache();
    assert!(!cache.is_loaded());

    let datasets = cache.datasets().await.unwrap();
    let selection = resolve_selection(SelectionRequest::default(), &datasets, &map_settings());
    let first = render_dashboard(&datasets, &selection, &map_settings());

    let again = cache.datasets().await.unwrap();
    let second = render_dashboard(&again, &selection, &map_settings());

    assert!(cache.is_loaded());
    assert_eq!(first, second);
    assert_eq!(first.venue_map.total_count, 6);
    assert_eq!(first.artist_map.marker_count, 5);
    assert_eq!(first.artist_map.segment_count, 3);
}
