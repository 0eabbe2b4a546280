//! Repository implementations.
//!
//! - [`LocalRepository`]: in-memory tables, loaded from rows, CSV text, or CSV files
//! - [`RemoteRepository`]: CSV exports fetched over HTTP

pub mod local;
#[cfg(feature = "remote-repo")]
pub mod remote;

pub use local::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use remote::RemoteRepository;
