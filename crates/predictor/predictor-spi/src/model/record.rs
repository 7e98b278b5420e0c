//! Historical temperature record types.

use serde::{Deserialize, Serialize};

/// A single year of observed temperature data.
///
/// Records are kept in ascending year order with no duplicate years and are
/// treated as immutable for the duration of a prediction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    /// Calendar year of the observation
    pub year: i32,
    /// Observed annual mean temperature in degrees Celsius
    pub annual_mean: f64,
    /// Pre-computed centered five-year moving average of the annual mean
    pub five_year_smooth: f64,
}

impl TemperatureRecord {
    /// Create a new record.
    pub fn new(year: i32, annual_mean: f64, five_year_smooth: f64) -> Self {
        Self {
            year,
            annual_mean,
            five_year_smooth,
        }
    }
}
