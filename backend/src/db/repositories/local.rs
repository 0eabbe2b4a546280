//! In-memory repository for tests and offline development.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::db::repository::{DatasetRepository, RepositoryResult};
use crate::models::{ArtistLocationRow, VenueRow};
use crate::parsing::csv_parser;

/// Repository serving tables held in memory.
///
/// Counts how many times each table was requested so callers can verify memoization.
#[derive(Debug, Default)]
pub struct LocalRepository {
    venues: Vec<VenueRow>,
    artists: Vec<ArtistLocationRow>,
    label: String,
    venue_fetches: AtomicUsize,
    artist_fetches: AtomicUsize,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::with_rows(Vec::new(), Vec::new())
    }

    pub fn with_rows(venues: Vec<VenueRow>, artists: Vec<ArtistLocationRow>) -> Self {
        Self {
            venues,
            artists,
            label: "local (in-memory)".to_string(),
            ..Default::default()
        }
    }

    /// Decode both tables from CSV text.
    pub fn from_csv_str(venues_csv: &str, artists_csv: &str) -> RepositoryResult<Self> {
        let venues = csv_parser::parse_venues_csv(venues_csv.as_bytes())
            .map_err(|e| e.within("from_csv_str", "venues"))?;
        let artists = csv_parser::parse_artist_locations_csv(artists_csv.as_bytes())
            .map_err(|e| e.within("from_csv_str", "artists"))?;
        Ok(Self::with_rows(venues, artists))
    }

    /// Decode both tables from CSV files on disk.
    pub fn from_files(venues_path: &Path, artists_path: &Path) -> RepositoryResult<Self> {
        let venues = csv_parser::parse_venues_file(venues_path)?;
        let artists = csv_parser::parse_artist_locations_file(artists_path)?;
        let mut repo = Self::with_rows(venues, artists);
        repo.label = format!(
            "local files ({}, {})",
            venues_path.display(),
            artists_path.display()
        );
        Ok(repo)
    }

    /// Number of times the venue table has been fetched.
    pub fn venue_fetches(&self) -> usize {
        self.venue_fetches.load(Ordering::SeqCst)
    }

    /// Number of times the artist table has been fetched.
    pub fn artist_fetches(&self) -> usize {
        self.artist_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetRepository for LocalRepository {
    async fn fetch_venues(&self) -> RepositoryResult<Vec<VenueRow>> {
        self.venue_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.venues.clone())
    }

    async fn fetch_artist_locations(&self) -> RepositoryResult<Vec<ArtistLocationRow>> {
        self.artist_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.artists.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = LocalRepository::new();
        assert!(repo.fetch_venues().await.unwrap().is_empty());
        assert!(repo.fetch_artist_locations().await.unwrap().is_empty());
        assert_eq!(repo.venue_fetches(), 1);
        assert_eq!(repo.artist_fetches(), 1);
    }

    #[tokio::test]
    async fn test_from_csv_str() {
        let repo = LocalRepository::from_csv_str(
            "city,venue,latitude,longitude,start year,end year\nChicago,Green Mill,41.969,-87.6598,1907,2000\n",
            "name,location number,latitude,longitude,city,birthday,instrument,overview,article link\n",
        )
        .unwrap();

        let venues = repo.fetch_venues().await.unwrap();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].venue.as_deref(), Some("Green Mill"));
        assert!(repo.fetch_artist_locations().await.unwrap().is_empty());
    }

    #[test]
    fn test_from_csv_str_reports_dataset_on_error() {
        let err = LocalRepository::from_csv_str(
            "city,venue,latitude,longitude,start year,end year\n",
            "name,latitude\n",
        )
        .unwrap_err();
        assert_eq!(err.context().dataset.as_deref(), Some("artists"));
    }
}
