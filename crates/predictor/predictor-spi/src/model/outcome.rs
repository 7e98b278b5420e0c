//! Prediction outcome types.

use serde::{Deserialize, Serialize};

use crate::model::TrendLine;

/// The result of running one prediction model against the historical series.
///
/// Produced fresh on every run and never mutated afterwards; a new run
/// produces a new outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// Point estimate for the target year, in degrees Celsius
    pub predicted_temperature: f64,
    /// Model-fit confidence score, always within `[0, 1]`
    pub confidence: f64,
    /// Fitted equation, when the strategy has one
    pub model_equation: Option<String>,
    /// Narrative detail lines describing how the estimate was produced
    pub details: Vec<String>,
    /// User-facing rejection message, when the run did not validate
    pub error_message: Option<String>,
}

impl PredictionOutcome {
    /// Trivial zero outcome returned when a model receives an empty series.
    pub fn empty() -> Self {
        Self {
            predicted_temperature: 0.0,
            confidence: 0.0,
            model_equation: None,
            details: Vec::new(),
            error_message: None,
        }
    }

    /// Zero-prediction outcome carrying a rejection message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            predicted_temperature: 0.0,
            confidence: 0.0,
            model_equation: None,
            details: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    /// Whether the run was rejected.
    pub fn is_rejected(&self) -> bool {
        self.error_message.is_some()
    }
}

/// A completed simulation run: the outcome plus the trend line for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The accepted or rejected prediction
    pub outcome: PredictionOutcome,
    /// Interpolated trend points; empty when the run was rejected
    pub trend_line: TrendLine,
}
