//! Chart rendering payload
//!
//! Assembles the `{categories, series}` data the charting surface consumes:
//! the historical series appropriate to the selected model, plus the dashed
//! prediction-trend series aligned to the combined year axis and padded
//! with nulls up to the junction point.

use predictor_facade::{ModelKind, SimulationResult, TemperatureRecord};
use serde::{Deserialize, Serialize};

/// One named line on the chart; `None` points are gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend name
    pub name: String,
    /// Values aligned to the category axis; `None` renders as a gap
    pub points: Vec<Option<f64>>,
}

/// The full chart payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Year labels for the x axis
    pub categories: Vec<String>,
    /// Lines to draw
    pub series: Vec<ChartSeries>,
}

/// Build the chart payload for one simulation run.
///
/// The polynomial view plots raw annual means; the other views plot the
/// smoothed series the models actually fit. A completed run appends the
/// trend-line years to the axis and adds the prediction series, which is
/// null before the junction (the last historical year).
pub fn chart_data(
    series: &[TemperatureRecord],
    kind: ModelKind,
    result: &SimulationResult,
) -> ChartData {
    let mut categories: Vec<String> = series.iter().map(|r| r.year.to_string()).collect();

    let (name, values): (&str, Vec<f64>) = match kind {
        ModelKind::Polynomial => (
            "Annual Mean",
            series.iter().map(|r| r.annual_mean).collect(),
        ),
        ModelKind::Linear | ModelKind::MovingAverage => (
            "5-Year Smooth",
            series.iter().map(|r| r.five_year_smooth).collect(),
        ),
    };
    let mut historical = ChartSeries {
        name: name.to_string(),
        points: values.into_iter().map(Some).collect(),
    };

    let mut chart_series = Vec::new();
    let trend = &result.trend_line;

    if trend.is_empty() {
        chart_series.push(historical);
        return ChartData {
            categories,
            series: chart_series,
        };
    }

    // The trend line's first point repeats the last historical year, so the
    // axis extends by the remaining trend years only.
    let extension = trend.years.len().saturating_sub(1);
    categories.extend(trend.years.iter().skip(1).cloned());
    historical.points.extend(std::iter::repeat(None).take(extension));
    chart_series.push(historical);

    let mut prediction: Vec<Option<f64>> = vec![None; series.len().saturating_sub(1)];
    prediction.extend(trend.temperatures.iter().map(|&t| Some(t)));
    chart_series.push(ChartSeries {
        name: "Prediction Trend".to_string(),
        points: prediction,
    });

    ChartData {
        categories,
        series: chart_series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predictor_facade::{PredictionOutcome, TrendLine};

    fn sample_series() -> Vec<TemperatureRecord> {
        vec![
            TemperatureRecord::new(2020, 27.14, 27.11),
            TemperatureRecord::new(2021, 27.05, 27.15),
            TemperatureRecord::new(2022, 27.23, 27.19),
        ]
    }

    fn completed_result() -> SimulationResult {
        let mut trend_line = TrendLine::default();
        trend_line.push(2022, 27.19);
        trend_line.push(2026, 27.27);
        trend_line.push(2030, 27.35);

        SimulationResult {
            outcome: PredictionOutcome {
                predicted_temperature: 27.35,
                confidence: 0.8,
                model_equation: None,
                details: Vec::new(),
                error_message: None,
            },
            trend_line,
        }
    }

    #[test]
    fn test_all_series_align_to_combined_axis() {
        let chart = chart_data(&sample_series(), ModelKind::Linear, &completed_result());

        assert_eq!(chart.categories, vec!["2020", "2021", "2022", "2026", "2030"]);
        for line in &chart.series {
            assert_eq!(line.points.len(), chart.categories.len());
        }
    }

    #[test]
    fn test_prediction_series_null_padded_before_junction() {
        let chart = chart_data(&sample_series(), ModelKind::Linear, &completed_result());
        let prediction = &chart.series[1];

        assert_eq!(prediction.name, "Prediction Trend");
        // Null for 2020 and 2021, then the trend values from the junction on.
        assert_eq!(
            prediction.points,
            vec![None, None, Some(27.19), Some(27.27), Some(27.35)]
        );
    }

    #[test]
    fn test_historical_series_null_padded_after_junction() {
        let chart = chart_data(&sample_series(), ModelKind::MovingAverage, &completed_result());
        let historical = &chart.series[0];

        assert_eq!(historical.name, "5-Year Smooth");
        assert_eq!(
            historical.points,
            vec![Some(27.11), Some(27.15), Some(27.19), None, None]
        );
    }

    #[test]
    fn test_polynomial_view_plots_annual_means() {
        let chart = chart_data(&sample_series(), ModelKind::Polynomial, &completed_result());
        assert_eq!(chart.series[0].name, "Annual Mean");
        assert_eq!(chart.series[0].points[0], Some(27.14));
    }

    #[test]
    fn test_rejected_run_has_no_prediction_series() {
        let result = SimulationResult {
            outcome: PredictionOutcome::rejected("Calculation error occurred"),
            trend_line: TrendLine::default(),
        };
        let chart = chart_data(&sample_series(), ModelKind::Linear, &result);

        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.categories.len(), 3);
    }
}
