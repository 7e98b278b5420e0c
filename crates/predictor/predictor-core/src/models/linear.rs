//! Linear prediction strategy
//!
//! Straight-line least squares over the entire series. The slope already
//! bounds the extrapolation, so no dampening is applied; only the reported
//! confidence decays with horizon.

use predictor_spi::{PredictError, PredictionOutcome, Result, TemperatureRecord};

use crate::heuristics;
use crate::regression;

pub fn predict(
    series: &[TemperatureRecord],
    target_year: i32,
    current_year: i32,
) -> Result<PredictionOutcome> {
    if series.is_empty() {
        return Ok(PredictionOutcome::empty());
    }

    let origin = series[0].year;
    let last = &series[series.len() - 1];

    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|r| ((r.year - origin) as f64, r.five_year_smooth))
        .collect();

    let fit = regression::fit_linear(&points)?;
    let predicted = fit.predict_at((target_year - origin) as f64);
    if !predicted.is_finite() {
        return Err(PredictError::ComputationFault(
            "linear fit produced a non-finite estimate".to_string(),
        ));
    }

    let horizon = heuristics::years_into_future(target_year, current_year);
    let confidence = heuristics::decayed_confidence(fit.r_squared, horizon);

    let details = vec![
        format!(
            "Fitted a linear trend to all {} records ({}-{})",
            series.len(),
            origin,
            last.year
        ),
        format!("Observed trend: {:+.4}\u{b0}C per year", fit.slope),
        format!("R-squared: {:.3}", fit.r_squared),
        format!("Confidence after distance decay: {:.1}%", confidence * 100.0),
    ];

    Ok(PredictionOutcome {
        predicted_temperature: predicted,
        confidence,
        model_equation: Some(fit.equation()),
        details,
        error_message: None,
    })
}
