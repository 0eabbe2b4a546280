//! Data loading for the venue and artist sheets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Services (filter → sanitize → render)                  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  DatasetCache - loads each sheet once per process       │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  DatasetRepository trait                                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │ RemoteRepository (HTTP CSV)  │  LocalRepository (memory / files)
//!     └──────────────────────────────┘
//! ```

pub mod cache;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use cache::{DatasetCache, Datasets};
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use repositories::RemoteRepository;
pub use repository::{
    DatasetRepository, ErrorContext, RepositoryError, RepositoryResult,
};
