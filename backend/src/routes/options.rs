use serde::{Deserialize, Serialize};

/// Choices offered by the sidebar controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub year_min: i32,
    pub year_max: i32,
    /// Unique cities in first-appearance order
    pub cities: Vec<String>,
    /// Unique artist names in first-appearance order
    pub artists: Vec<String>,
}

/// Route path for the filter options.
pub const OPTIONS_PATH: &str = "/options";
