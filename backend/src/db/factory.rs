//! Repository factory for dependency injection.
//!
//! Creates the repository selected by configuration.

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use super::repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
use super::repositories::RemoteRepository;
use super::repository::{DatasetRepository, RepositoryError, RepositoryResult};
use crate::config::RepositorySettings;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Spreadsheet CSV exports fetched over HTTP
    Remote,
    /// CSV files on disk, held in memory
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" | "http" => Ok(Self::Remote),
            "local" | "file" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create the repository described by `settings`.
    pub fn create(settings: &RepositorySettings) -> RepositoryResult<Arc<dyn DatasetRepository>> {
        let repo_type = settings.repository_type().map_err(RepositoryError::configuration)?;
        info!(?repo_type, "creating repository");

        match repo_type {
            RepositoryType::Remote => Self::create_remote(settings),
            RepositoryType::Local => {
                let (venues, artists) = match (&settings.venues_path, &settings.artists_path) {
                    (Some(v), Some(a)) => (v, a),
                    _ => {
                        return Err(RepositoryError::configuration(
                            "Local repository requires 'repository.venues_path' and 'repository.artists_path'",
                        ))
                    }
                };
                let repo = LocalRepository::from_files(venues, artists)?;
                Ok(Arc::new(repo) as Arc<dyn DatasetRepository>)
            }
        }
    }

    #[cfg(feature = "remote-repo")]
    fn create_remote(settings: &RepositorySettings) -> RepositoryResult<Arc<dyn DatasetRepository>> {
        let repo = RemoteRepository::new(
            settings.venues_url.clone(),
            settings.artists_url.clone(),
            std::time::Duration::from_secs(settings.timeout_secs),
        )?;
        Ok(Arc::new(repo) as Arc<dyn DatasetRepository>)
    }

    #[cfg(not(feature = "remote-repo"))]
    fn create_remote(_settings: &RepositorySettings) -> RepositoryResult<Arc<dyn DatasetRepository>> {
        Err(RepositoryError::configuration(
            "Remote repository feature not enabled",
        ))
    }

    /// Create an empty in-memory repository.
    pub fn create_local() -> Arc<dyn DatasetRepository> {
        Arc::new(LocalRepository::new())
    }
}
