//! HTTP server module for the jazz map.
//!
//! Exposes the render pipeline as a small REST API plus one Leaflet page that consumes it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Selection parsing                                      │
//! │  - JSON serialization, CORS, compression, tracing         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Filter, sanitize, render, count                        │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dataset cache + repository (db/)                         │
//! │  - RemoteRepository / LocalRepository                     │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
