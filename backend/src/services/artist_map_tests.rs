#[cfg(test)]
mod tests {
    use crate::models::ArtistLocationRecord;
    use crate::routes::map::{LatLng, RejectionStats};
    use crate::services::artist_map::*;

    fn location(name: &str, number: i64, lat: f64, lng: f64) -> ArtistLocationRecord {
        ArtistLocationRecord {
            row: 0,
            name: name.to_string(),
            location_number: number,
            latitude: lat,
            longitude: lng,
            city: "Somewhere".to_string(),
            birthday: "1920-08-29".to_string(),
            instrument: "alto saxophone".to_string(),
            overview: "Bebop pioneer".to_string(),
            article_link: "https://example.org/bird".to_string(),
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_palette_wraps_around() {
        assert_eq!(palette_color(0), "red");
        assert_eq!(palette_color(5), "purple");
        assert_eq!(palette_color(6), "red");
        assert_eq!(palette_color(13), "orange");
    }

    #[test]
    fn test_seven_artists_do_not_overflow_palette() {
        let selected = names(&["a", "b", "c", "d", "e", "f", "g"]);
        let records: Vec<_> = selected
            .iter()
            .map(|n| location(n, 1, 10.0, 10.0))
            .collect();

        let data = render_artist_map(
            &records,
            &selected,
            ArtistPathOrder::Source,
            RejectionStats::default(),
        );
        assert_eq!(data.paths.len(), 7);
        assert_eq!(data.paths[6].color, data.paths[0].color);
        assert_eq!(data.paths[6].markers[0].color, "red");
    }

    #[test]
    fn test_n_locations_give_n_minus_one_segments() {
        let records = vec![
            location("Charlie Parker", 1, 39.0997, -94.5786),
            location("Charlie Parker", 2, 40.7128, -74.0060),
            location("Charlie Parker", 3, 34.0522, -118.2437),
        ];
        let data = render_artist_map(
            &records,
            &names(&["Charlie Parker"]),
            ArtistPathOrder::Source,
            RejectionStats::default(),
        );

        let path = &data.paths[0];
        assert_eq!(path.markers.len(), 3);
        assert_eq!(path.segments.len(), 2);
        assert_eq!(path.segments[0].from, LatLng::new(39.0997, -94.5786));
        assert_eq!(path.segments[1].to, LatLng::new(34.0522, -118.2437));
        assert!(path.segments.iter().all(|s| s.color == "red" && s.weight == 3.0));
        assert_eq!(path.segments[0].tooltip.as_deref(), Some("Charlie Parker"));
        assert_eq!(data.marker_count, 3);
        assert_eq!(data.segment_count, 2);
    }

    #[test]
    fn test_single_location_has_no_segments() {
        let records = vec![location("Bix Beiderbecke", 1, 41.5236, -90.5776)];
        let path = &render_artist_map(
            &records,
            &names(&["Bix Beiderbecke"]),
            ArtistPathOrder::Source,
            RejectionStats::default(),
        )
        .paths[0];
        assert_eq!(path.markers.len(), 1);
        assert!(path.segments.is_empty());
    }

    #[test]
    fn test_colors_follow_selection_order_not_data_order() {
        let records = vec![location("Ella", 1, 1.0, 1.0), location("Duke", 1, 2.0, 2.0)];
        let data = render_artist_map(
            &records,
            &names(&["Duke", "Ella"]),
            ArtistPathOrder::Source,
            RejectionStats::default(),
        );
        assert_eq!(data.paths[0].name, "Duke");
        assert_eq!(data.paths[0].color, "red");
        assert_eq!(data.paths[1].name, "Ella");
        assert_eq!(data.paths[1].color, "orange");
    }

    #[test]
    fn test_absent_artist_keeps_palette_slot() {
        let records = vec![location("Ella", 1, 1.0, 1.0)];
        let data = render_artist_map(
            &records,
            &names(&["Nobody", "Ella"]),
            ArtistPathOrder::Source,
            RejectionStats::default(),
        );
        assert!(data.paths[0].markers.is_empty());
        assert!(data.paths[0].segments.is_empty());
        assert_eq!(data.paths[1].color, "orange");
    }

    #[test]
    fn test_source_order_is_kept_by_default() {
        let records = vec![
            location("Miles", 2, 40.7, -74.0),
            location("Miles", 1, 38.6, -90.2),
        ];
        let groups = group_by_artist(&records, &names(&["Miles"]), ArtistPathOrder::default());
        let numbers: Vec<i64> = groups[0].1.iter().map(|r| r.location_number).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn test_location_number_order_sorts_stably() {
        let records = vec![
            location("Miles", 2, 40.7, -74.0),
            location("Miles", 1, 38.6, -90.2),
            location("Miles", 1, 37.0, -90.0),
        ];
        let groups = group_by_artist(&records, &names(&["Miles"]), ArtistPathOrder::LocationNumber);
        let lats: Vec<f64> = groups[0].1.iter().map(|r| r.latitude).collect();
        assert_eq!(lats, vec![38.6, 37.0, 40.7]);
    }

    #[test]
    fn test_marker_style_and_popup() {
        let records = vec![location("Bird", 1, 39.0, -94.5)];
        let data = render_artist_map(
            &records,
            &names(&["Bird"]),
            ArtistPathOrder::Source,
            RejectionStats::default(),
        );
        let marker = &data.paths[0].markers[0];
        assert_eq!(marker.radius, 6.0);
        assert_eq!(marker.popup_max_width, 500);
        assert_eq!(marker.tooltip.as_deref(), Some("Bird"));
        assert!(!marker.interactive);
        assert!(marker.popup_html.starts_with("<b>name:</b> Bird<br><b>location number:</b> 1"));
        assert_eq!(marker.popup_html.matches("<br>").count(), 8);
    }

    #[test]
    fn test_titles() {
        let data = render_artist_map(&[], &[], ArtistPathOrder::Source, RejectionStats::default());
        assert_eq!(data.title, "Map of Artist Careers:");
        assert_eq!(data.subtitle, "No Selected Artists");
        assert!(data.paths.is_empty());
        assert_eq!(data.viewport.zoom, 3.4);
        assert_eq!(
            artist_map_subtitle(&names(&["Ella", "Duke"])),
            "Showing Career(s) of Ella, Duke"
        );
    }

    #[test]
    fn test_order_config_names() {
        let order: ArtistPathOrder = serde_json::from_str("\"location_number\"").unwrap();
        assert_eq!(order, ArtistPathOrder::LocationNumber);
    }
}
