//! Repository trait for the two source datasets.

use async_trait::async_trait;

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::{ArtistLocationRow, VenueRow};

/// Source of the venue and artist location tables.
///
/// Implementations return the full, unfiltered tables in source row order. They are not
/// expected to cache; wrap them in [`DatasetCache`](crate::db::DatasetCache) for that.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Fetch every row of the venue sheet.
    async fn fetch_venues(&self) -> RepositoryResult<Vec<VenueRow>>;

    /// Fetch every row of the artist location sheet.
    async fn fetch_artist_locations(&self) -> RepositoryResult<Vec<ArtistLocationRow>>;

    /// Human-readable description of where the data comes from.
    fn describe(&self) -> String;
}
