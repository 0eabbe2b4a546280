//! Per-city active venue counts.

use std::collections::HashMap;

use crate::models::VenueRecord;
use crate::routes::summary::{CityCount, VenueSummary};

pub const SUMMARY_HEADING: &str = "Active Venues";

/// Count sanitized venues per city.
pub fn count_by_city(records: &[VenueRecord]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.city.as_str()).or_insert(0) += 1;
    }
    counts
}

/// One count per selected city, in selection order, looked up by city name.
pub fn count_active_venues(records: &[VenueRecord], cities: &[String]) -> VenueSummary {
    let counts = count_by_city(records);
    let counts: Vec<CityCount> = cities
        .iter()
        .map(|city| CityCount {
            city: city.clone(),
            count: counts.get(city.as_str()).copied().unwrap_or(0),
        })
        .collect();

    VenueSummary {
        heading: SUMMARY_HEADING.to_string(),
        total: counts.iter().map(|c| c.count).sum(),
        counts,
    }
}
