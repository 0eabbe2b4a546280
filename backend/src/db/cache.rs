//! Process-lifetime memoization of the source datasets.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use super::repository::{DatasetRepository, RepositoryError, RepositoryResult};
use crate::models::{ArtistLocationRow, VenueRow};

/// Both source tables, shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub venues: Arc<Vec<VenueRow>>,
    pub artists: Arc<Vec<ArtistLocationRow>>,
}

impl Datasets {
    pub fn new(venues: Vec<VenueRow>, artists: Vec<ArtistLocationRow>) -> Self {
        Self {
            venues: Arc::new(venues),
            artists: Arc::new(artists),
        }
    }
}

/// Loads each table from the wrapped repository at most once.
///
/// A successful load is kept for the life of the cache and never invalidated. A failed
/// load is not remembered: the error goes back to the caller and the next call tries again.
pub struct DatasetCache {
    repository: Arc<dyn DatasetRepository>,
    venues: OnceCell<Arc<Vec<VenueRow>>>,
    artists: OnceCell<Arc<Vec<ArtistLocationRow>>>,
}

impl DatasetCache {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self {
            repository,
            venues: OnceCell::new(),
            artists: OnceCell::new(),
        }
    }

    pub async fn venues(&self) -> RepositoryResult<Arc<Vec<VenueRow>>> {
        self.venues
            .get_or_try_init(|| async {
                let rows = self.repository.fetch_venues().await?;
                info!(rows = rows.len(), "venue sheet cached");
                Ok::<_, RepositoryError>(Arc::new(rows))
            })
            .await
            .map(Arc::clone)
    }

    pub async fn artists(&self) -> RepositoryResult<Arc<Vec<ArtistLocationRow>>> {
        self.artists
            .get_or_try_init(|| async {
                let rows = self.repository.fetch_artist_locations().await?;
                info!(rows = rows.len(), "artist sheet cached");
                Ok::<_, RepositoryError>(Arc::new(rows))
            })
            .await
            .map(Arc::clone)
    }

    /// Both tables, loading whichever is not cached yet.
    pub async fn datasets(&self) -> RepositoryResult<Datasets> {
        let (venues, artists) = tokio::try_join!(self.venues(), self.artists())?;
        Ok(Datasets { venues, artists })
    }

    /// Whether both tables have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.venues.initialized() && self.artists.initialized()
    }

    pub fn describe(&self) -> String {
        self.repository.describe()
    }
}
