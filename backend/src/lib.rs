//! # Jazz Map Backend
//!
//! Interactive maps of historical jazz venues and jazz artists' careers.
//!
//! Two spreadsheets are the source of truth: one lists venues with their city, coordinates
//! and years of operation, the other lists every residence of every artist. This crate loads
//! both once, then answers each sidebar selection with a freshly rendered view:
//!
//! - a venue map filtered by an active-years window and a set of cities,
//! - a per-city count of the venues shown,
//! - an artist map joining each selected artist's residences with colored lines.
//!
//! ## Architecture
//!
//! - [`models`]: raw rows, sanitized records and the sidebar selection
//! - [`parsing`]: CSV decoding of the two sheets
//! - [`db`]: repository pattern over remote and local sheets, plus the dataset cache
//! - [`services`]: filtering, sanitization and rendering
//! - [`routes`]: view types returned by the API
//! - [`config`]: TOML configuration
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
