//! Repository fetching the spreadsheet CSV exports over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::repository::{DatasetRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{ArtistLocationRow, VenueRow};
use crate::parsing::csv_parser;

/// Fetches each sheet with a single GET. Failures are returned as-is; there is no retry.
#[derive(Debug, Clone)]
pub struct RemoteRepository {
    client: reqwest::Client,
    venues_url: String,
    artists_url: String,
}

impl RemoteRepository {
    pub fn new(
        venues_url: impl Into<String>,
        artists_url: impl Into<String>,
        timeout: Duration,
    ) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                RepositoryError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            venues_url: venues_url.into(),
            artists_url: artists_url.into(),
        })
    }

    async fn fetch_csv(&self, url: &str, dataset: &str, operation: &str) -> RepositoryResult<String> {
        info!(dataset, url, "fetching sheet");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RepositoryError::from(e).within(operation, dataset))?;

        let status = response.status();
        if !status.is_success() {
            warn!(dataset, %status, "sheet request failed");
            return Err(RepositoryError::connection_with_context(
                format!("unexpected HTTP status {}", status),
                ErrorContext::new(operation)
                    .with_dataset(dataset)
                    .with_source(url),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| RepositoryError::from(e).within(operation, dataset))
    }
}

#[async_trait]
impl DatasetRepository for RemoteRepository {
    async fn fetch_venues(&self) -> RepositoryResult<Vec<VenueRow>> {
        let body = self
            .fetch_csv(&self.venues_url, "venues", "fetch_venues")
            .await?;
        csv_parser::parse_venues_csv(body.as_bytes()).map_err(|e| e.within("fetch_venues", "venues"))
    }

    async fn fetch_artist_locations(&self) -> RepositoryResult<Vec<ArtistLocationRow>> {
        let body = self
            .fetch_csv(&self.artists_url, "artists", "fetch_artist_locations")
            .await?;
        csv_parser::parse_artist_locations_csv(body.as_bytes())
            .map_err(|e| e.within("fetch_artist_locations", "artists"))
    }

    fn describe(&self) -> String {
        format!("remote ({}, {})", self.venues_url, self.artists_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_names_both_urls() {
        let repo = RemoteRepository::new(
            "http://localhost/venues.csv",
            "http://localhost/artists.csv",
            Duration::from_secs(5),
        )
        .unwrap();
        let label = repo.describe();
        assert!(label.contains("venues.csv"));
        assert!(label.contains("artists.csv"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_data_fetch_error() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        let repo = RemoteRepository::new(
            "http://127.0.0.1:9/venues.csv",
            "http://127.0.0.1:9/artists.csv",
            Duration::from_secs(2),
        )
        .unwrap();

        let err = repo.fetch_venues().await.unwrap_err();
        assert!(err.is_data_fetch());
        assert_eq!(err.context().dataset.as_deref(), Some("venues"));
    }
}
