//! Plausibility guard
//!
//! A candidate prediction must land inside the historical annual-mean
//! envelope, widened by a margin that grows with the prediction horizon.

use predictor_spi::{PredictError, Result, TemperatureRecord};
use serde::{Deserialize, Serialize};

/// The `[min - margin, max + margin]` band a prediction must fall within.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityEnvelope {
    /// Lower acceptance bound
    pub lower: f64,
    /// Upper acceptance bound
    pub upper: f64,
}

impl PlausibilityEnvelope {
    /// Build the envelope from the full series and the prediction horizon.
    ///
    /// The margin starts at 1.5 degrees and widens by one degree per twenty
    /// years of horizon, capped at 4.5 total.
    pub fn from_series(series: &[TemperatureRecord], years_into_future: i32) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in series {
            min = min.min(record.annual_mean);
            max = max.max(record.annual_mean);
        }

        let margin = 1.5 + (years_into_future as f64 / 20.0).min(3.0);
        Self {
            lower: min - margin,
            upper: max + margin,
        }
    }

    /// Accept or reject a candidate prediction. Non-finite candidates are
    /// rejected.
    pub fn check(&self, prediction: f64) -> Result<()> {
        if prediction >= self.lower && prediction <= self.upper {
            Ok(())
        } else {
            Err(PredictError::OutOfRange {
                prediction,
                lower: self.lower,
                upper: self.upper,
            })
        }
    }
}
