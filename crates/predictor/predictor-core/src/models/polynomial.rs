//! Polynomial prediction strategy
//!
//! Fits a degree-2 curve to the smoothed values of the most recent window,
//! then dampens the predicted change before applying it to the last known
//! smooth. Quadratic extrapolation overshoots on long horizons, so both the
//! change and the reported confidence are tempered.

use predictor_spi::{PredictError, PredictionOutcome, Result, TemperatureRecord};

use crate::heuristics;
use crate::models::RECENT_WINDOW;
use crate::regression;

/// Number of fitted parameters beyond the intercept, for the R-squared
/// degrees-of-freedom adjustment.
const FITTED_PARAMETERS: usize = 2;

pub fn predict(
    series: &[TemperatureRecord],
    target_year: i32,
    current_year: i32,
) -> Result<PredictionOutcome> {
    if series.is_empty() {
        return Ok(PredictionOutcome::empty());
    }

    let start = series.len().saturating_sub(RECENT_WINDOW);
    let recent = &series[start..];
    let origin = recent[0].year;
    let last = &recent[recent.len() - 1];

    // Normalized x keeps the Vandermonde sums well conditioned; fitting raw
    // calendar years would not.
    let points: Vec<(f64, f64)> = recent
        .iter()
        .map(|r| ((r.year - origin) as f64, r.five_year_smooth))
        .collect();

    let fit = regression::fit_quadratic(&points)?;
    let raw = fit.predict_at((target_year - origin) as f64);
    if !raw.is_finite() {
        return Err(PredictError::ComputationFault(
            "quadratic fit produced a non-finite estimate".to_string(),
        ));
    }

    let horizon = heuristics::years_into_future(target_year, current_year);
    let dampening = heuristics::dampening_factor(horizon);
    let change = raw - last.five_year_smooth;
    let adjustment = heuristics::adjustment_factor(change);
    let predicted = last.five_year_smooth + change * dampening * adjustment;

    let base_r_squared =
        heuristics::adjusted_r_squared(fit.r_squared, recent.len(), FITTED_PARAMETERS);
    let confidence = heuristics::decayed_confidence(base_r_squared, horizon);

    let details = vec![
        format!(
            "Fitted a degree-2 polynomial to the last {} records ({}-{})",
            recent.len(),
            origin,
            last.year
        ),
        format!("Adjusted R-squared: {:.3}", base_r_squared),
        format!(
            "Raw estimate {:.2}\u{b0}C dampened to {:.2}\u{b0}C over a {}-year horizon",
            raw, predicted, horizon
        ),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::testing::{constant_series, trending_series};

    #[test]
    fn test_constant_series_predicts_the_constant() {
        let series = constant_series(1993..=2022, 26.0);
        for target in [2025, 2050, 2100] {
            let outcome = predict(&series, target, 2024).unwrap();
            assert!(
                (outcome.predicted_temperature - 26.0).abs() < 1e-6,
                "target {} predicted {}",
                target,
                outcome.predicted_temperature
            );
        }
    }

    #[test]
    fn test_window_restricted_to_recent_records() {
        // Old cold records outside the 30-year window must not drag the fit.
        let mut series = constant_series(1901..=1992, 20.0);
        series.extend(constant_series(1993..=2022, 26.0));

        let outcome = predict(&series, 2030, 2024).unwrap();
        assert!((outcome.predicted_temperature - 26.0).abs() < 1e-6);
    }

    #[test]
    fn test_dampening_shrinks_far_future_change() {
        let series = trending_series(1993..=2022, 26.0, 0.02);

        let near = predict(&series, 2030, 2024).unwrap().predicted_temperature;
        let far = predict(&series, 2090, 2024).unwrap().predicted_temperature;
        let last_smooth = 26.0 + 0.02 * 29.0;

        // The far prediction is warmer, but by less than a straight-line
        // extension of the near-term change rate would give.
        assert!(far > near);
        let near_rate = (near - last_smooth) / 8.0;
        let far_rate = (far - last_smooth) / 68.0;
        assert!(far_rate < near_rate);
    }

    #[test]
    fn test_confidence_in_unit_interval() {
        let series = trending_series(1993..=2022, 26.0, 0.02);
        for target in [2024, 2040, 2070, 2100] {
            let outcome = predict(&series, target, 2024).unwrap();
            assert!(outcome.confidence >= 0.0 && outcome.confidence <= 1.0);
        }
    }

    #[test]
    fn test_equation_and_details_present() {
        let series = trending_series(1993..=2022, 26.0, 0.02);
        let outcome = predict(&series, 2035, 2024).unwrap();
        assert!(outcome.model_equation.is_some());
        assert!(!outcome.details.is_empty());
    }

    #[test]
    fn test_degenerate_window_errors() {
        let series = constant_series(2021..=2022, 26.0);
        let err = predict(&series, 2030, 2024).unwrap_err();
        assert!(matches!(err, PredictError::DegenerateFit { .. }));
    }
}
