//! Prediction strategies
//!
//! Three strategies share one input/output contract and nothing else:
//!
//! - [`polynomial`]: dampened degree-2 extrapolation over the recent window
//! - [`linear`]: straight-line extrapolation over the entire series
//! - [`moving_average`]: local trend from the last five records
//!
//! Dispatch is a plain match on [`ModelKind`]; the asymmetries between the
//! strategies (dampening, decay) are deliberate and live in each module.

pub mod linear;
pub mod moving_average;
pub mod polynomial;

use predictor_spi::{ModelKind, PredictionOutcome, Result, TemperatureRecord};

/// Number of most recent records the polynomial model fits against.
pub const RECENT_WINDOW: usize = 30;

/// Number of trailing records the moving-average model considers.
pub const AVERAGE_WINDOW: usize = 5;

/// Run the selected strategy against the series.
///
/// `current_year` is the calendar year treated as "now" by the horizon
/// heuristics; threading it through keeps every strategy a pure function.
pub fn predict(
    kind: ModelKind,
    series: &[TemperatureRecord],
    target_year: i32,
    current_year: i32,
) -> Result<PredictionOutcome> {
    match kind {
        ModelKind::Polynomial => polynomial::predict(series, target_year, current_year),
        ModelKind::Linear => linear::predict(series, target_year, current_year),
        ModelKind::MovingAverage => moving_average::predict(series, target_year, current_year),
    }
}
