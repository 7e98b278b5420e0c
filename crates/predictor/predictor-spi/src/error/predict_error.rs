//! Prediction error types
//!
//! Defines the standardized error type for all prediction operations.

use thiserror::Error;

/// Result type alias for prediction operations
pub type Result<T> = std::result::Result<T, PredictError>;

/// Errors that can occur while computing a temperature prediction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Target year outside the supported prediction range
    #[error("Target year {year} is outside the supported prediction range")]
    InvalidYear { year: i32 },

    /// Regression primitive cannot fit the data
    #[error("Degenerate fit: need at least {required} distinct points, got {actual}")]
    DegenerateFit { required: usize, actual: usize },

    /// Prediction fell outside the plausibility envelope
    #[error("Prediction {prediction:.2} falls outside the plausible range [{lower:.2}, {upper:.2}]")]
    OutOfRange {
        prediction: f64,
        lower: f64,
        upper: f64,
    },

    /// Unexpected arithmetic fault
    #[error("Computation fault: {0}")]
    ComputationFault(String),

    /// No historical records reached the model
    #[error("Historical series is empty")]
    EmptySeries,
}
