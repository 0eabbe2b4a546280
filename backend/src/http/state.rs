//! Application state for the HTTP server.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::MapSettings;
use crate::db::DatasetCache;
use crate::routes::session::ClickedPoint;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lazily loaded source tables
    pub cache: Arc<DatasetCache>,
    pub map: MapSettings,
    /// Most recent map click; one slot shared by both maps
    pub last_clicked: Arc<RwLock<Option<ClickedPoint>>>,
}

impl AppState {
    pub fn new(cache: Arc<DatasetCache>, map: MapSettings) -> Self {
        Self {
            cache,
            map,
            last_clicked: Arc::new(RwLock::new(None)),
        }
    }

    pub fn record_click(&self, point: ClickedPoint) {
        *self.last_clicked.write() = Some(point);
    }

    pub fn last_click(&self) -> Option<ClickedPoint> {
        *self.last_clicked.read()
    }
}
