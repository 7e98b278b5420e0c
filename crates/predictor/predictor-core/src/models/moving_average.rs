//! Moving-average prediction strategy
//!
//! Averages the smoothed values of the trailing window and extends the
//! observed yearly change from the last historical year. Confidence is the
//! fit of the implied local trend only; no distance decay is applied.

use predictor_spi::{PredictionOutcome, Result, TemperatureRecord};

use crate::models::AVERAGE_WINDOW;
use crate::regression;

pub fn predict(
    series: &[TemperatureRecord],
    target_year: i32,
    _current_year: i32,
) -> Result<PredictionOutcome> {
    if series.is_empty() {
        return Ok(PredictionOutcome::empty());
    }

    let start = series.len().saturating_sub(AVERAGE_WINDOW);
    let window = &series[start..];
    let k = window.len();
    let first_smooth = window[0].five_year_smooth;
    let last = &window[k - 1];

    let average: f64 = window.iter().map(|r| r.five_year_smooth).sum::<f64>() / k as f64;
    let yearly_change = if k > 1 {
        (last.five_year_smooth - first_smooth) / (k - 1) as f64
    } else {
        0.0
    };

    let years_ahead = target_year - last.year;
    let predicted = average + yearly_change * years_ahead as f64;

    // Confidence is how well the implied straight trend explains the window
    // itself; horizon plays no part here.
    let actual: Vec<f64> = window.iter().map(|r| r.five_year_smooth).collect();
    let implied: Vec<f64> = (0..k)
        .map(|i| first_smooth + yearly_change * i as f64)
        .collect();
    let confidence = regression::r_squared(&actual, &implied).clamp(0.0, 1.0);

    let details = vec![
        format!(
            "Average smoothed temperature of the last {} records: {:.2}\u{b0}C",
            k, average
        ),
        format!("Observed yearly change: {:+.3}\u{b0}C", yearly_change),
        format!(
            "Projected {} years past {} at that rate",
            years_ahead, last.year
        ),
        format!("Confidence reflects local trend fit only: {:.1}%", confidence * 100.0),
    ];

    Ok(PredictionOutcome {
        predicted_temperature: predicted,
        confidence,
        model_equation: None,
        details,
        error_message: None,
    })
}
