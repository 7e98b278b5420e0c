//! Prediction model selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The prediction strategy a simulation run dispatches to.
///
/// The three strategies share only the common input/output contract; there is
/// no trait behind them. Dispatch happens by matching on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Degree-2 least-squares fit over the recent window, with dampening
    Polynomial,
    /// Degree-1 least-squares fit over the entire series
    Linear,
    /// Local trend extrapolated from the last five records
    MovingAverage,
}

impl ModelKind {
    /// Human-readable label used in summaries and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::Polynomial => "Polynomial Regression",
            ModelKind::Linear => "Linear Regression",
            ModelKind::MovingAverage => "Moving Average",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "polynomial" | "poly" => Ok(ModelKind::Polynomial),
            "linear" => Ok(ModelKind::Linear),
            "moving-average" | "moving_average" | "movingaverage" | "ma" => {
                Ok(ModelKind::MovingAverage)
            }
            other => Err(format!(
                "Unknown model '{}'. Use 'polynomial', 'linear', or 'moving-average'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_all_spellings() {
        assert_eq!("polynomial".parse::<ModelKind>(), Ok(ModelKind::Polynomial));
        assert_eq!("poly".parse::<ModelKind>(), Ok(ModelKind::Polynomial));
        assert_eq!("linear".parse::<ModelKind>(), Ok(ModelKind::Linear));
        assert_eq!(
            "moving-average".parse::<ModelKind>(),
            Ok(ModelKind::MovingAverage)
        );
        assert_eq!("MA".parse::<ModelKind>(), Ok(ModelKind::MovingAverage));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "arima".parse::<ModelKind>().unwrap_err();
        assert!(err.contains("Unknown model 'arima'"));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(ModelKind::Polynomial.to_string(), "Polynomial Regression");
        assert_eq!(ModelKind::Linear.to_string(), "Linear Regression");
        assert_eq!(ModelKind::MovingAverage.to_string(), "Moving Average");
    }
}
