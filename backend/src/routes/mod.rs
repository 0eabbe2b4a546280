//! Serializable view types returned by the HTTP API, one module per route.

pub mod artist_map;
pub mod dashboard;
pub mod map;
pub mod options;
pub mod session;
pub mod summary;
pub mod venue_map;

#[cfg(test)]
mod tests {
    #[test]
    fn test_route_paths() {
        assert_eq!(super::venue_map::VENUE_MAP_PATH, "/venue-map");
        assert_eq!(super::artist_map::ARTIST_MAP_PATH, "/artist-map");
        assert_eq!(super::summary::VENUE_SUMMARY_PATH, "/venue-summary");
        assert_eq!(super::dashboard::DASHBOARD_PATH, "/dashboard");
        assert_eq!(super::options::OPTIONS_PATH, "/options");
        assert_eq!(super::session::LAST_CLICKED_PATH, "/session/last-clicked");
    }
}
