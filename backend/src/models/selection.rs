use serde::{Deserialize, Serialize};

/// Lower bound of the year slider.
pub const YEAR_SLIDER_MIN: i32 = 1900;
/// Upper bound of the year slider.
pub const YEAR_SLIDER_MAX: i32 = 2000;

/// Inclusive year window selected on the slider.
///
/// Endpoints are normalized on construction, so `start <= end` always holds no matter
/// which way round the slider handles were dragged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Whether a venue active from `start_year` to `end_year` was open during this window.
    ///
    /// A venue qualifies when it opened inside the window, closed inside the window, or
    /// spans the whole window.
    pub fn admits(&self, start_year: i32, end_year: i32) -> bool {
        self.contains(start_year)
            || self.contains(end_year)
            || (start_year <= self.start && end_year >= self.end)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(YEAR_SLIDER_MIN, YEAR_SLIDER_MAX)
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((a, b): (i32, i32)) -> Self {
        Self::new(a, b)
    }
}

impl From<YearRange> for (i32, i32) {
    fn from(range: YearRange) -> Self {
        (range.start, range.end)
    }
}

impl std::fmt::Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Everything the sidebar controls decide for one render.
///
/// City and artist lists keep the order in which they were selected: artist order drives
/// color assignment and city order drives the summary listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub year_range: YearRange,
    pub cities: Vec<String>,
    pub artists: Vec<String>,
}

impl FilterSelection {
    /// Build a selection, dropping repeated names after their first occurrence.
    pub fn new(year_range: YearRange, cities: Vec<String>, artists: Vec<String>) -> Self {
        Self {
            year_range,
            cities: dedup_preserving_order(cities),
            artists: dedup_preserving_order(artists),
        }
    }
}

fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
