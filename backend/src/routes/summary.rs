use serde::{Deserialize, Serialize};

/// Number of active venues in one selected city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

/// Per-city active venue counts shown beside the venue map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSummary {
    pub heading: String,
    /// One entry per selected city, in selection order
    pub counts: Vec<CityCount>,
    pub total: usize,
}

impl VenueSummary {
    /// Count for `city`, if it was selected.
    pub fn count_for(&self, city: &str) -> Option<usize> {
        self.counts.iter().find(|c| c.city == city).map(|c| c.count)
    }
}

/// Route path for the venue summary.
pub const VENUE_SUMMARY_PATH: &str = "/venue-summary";
