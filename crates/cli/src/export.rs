//! CSV export payload
//!
//! Renders a completed simulation as the three-block text payload the
//! export surface expects: historical rows, trend-line rows, then the
//! narrative detail lines.

use predictor_facade::{SimulationResult, TemperatureRecord};

/// Render the export payload for one simulation run.
pub fn render_export(series: &[TemperatureRecord], result: &SimulationResult) -> String {
    let mut out = String::new();

    out.push_str("Year,Annual Mean,5-Year Smooth\n");
    for record in series {
        out.push_str(&format!(
            "{},{:.2},{:.2}\n",
            record.year, record.annual_mean, record.five_year_smooth
        ));
    }

    out.push('\n');
    out.push_str("Prediction Results\n");
    out.push_str("Year,Predicted Temperature\n");
    for (year, temperature) in result
        .trend_line
        .years
        .iter()
        .zip(&result.trend_line.temperatures)
    {
        out.push_str(&format!("{},{:.2}\n", year, temperature));
    }

    out.push('\n');
    out.push_str("Simulation Details\n");
    for detail in &result.outcome.details {
        out.push_str(detail);
        out.push('\n');
    }
    if let Some(message) = &result.outcome.error_message {
        out.push_str(message);
        out.push('\n');
    }

    out
}
