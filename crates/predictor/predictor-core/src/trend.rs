//! Trend-line generation
//!
//! Produces the small ordered point sequence charts draw between the last
//! historical record and the target year, by re-invoking the selected model
//! at stepped intermediate years.

use predictor_spi::{ModelKind, TemperatureRecord, TrendLine};

use crate::models;

/// Build the trend line for an accepted prediction.
///
/// The first point is the last historical record's smoothed value; the last
/// point is exactly `(target_year, final_prediction)`. Intermediate years
/// step by a fifth of the span (rounded up) and re-run the same model; any
/// failed or non-finite intermediate falls back to the final prediction.
pub fn build_trend_line(
    series: &[TemperatureRecord],
    kind: ModelKind,
    target_year: i32,
    final_prediction: f64,
    current_year: i32,
) -> TrendLine {
    let mut line = TrendLine::default();
    let last = match series.last() {
        Some(record) => record,
        None => return line,
    };

    line.push(last.year, last.five_year_smooth);

    let span = target_year - last.year;
    let step = (f64::from(span) / 5.0).ceil() as i32;
    if step <= 0 {
        line.push(target_year, final_prediction);
        return line;
    }

    let mut year = last.year + step;
    while year < target_year {
        let value = match models::predict(kind, series, year, current_year) {
            Ok(outcome) if outcome.predicted_temperature.is_finite() => {
                outcome.predicted_temperature
            }
            _ => final_prediction,
        };
        line.push(year, value);
        year += step;
    }

    line.push(target_year, final_prediction);
    line
}
