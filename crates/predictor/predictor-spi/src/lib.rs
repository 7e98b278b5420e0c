//! Predictor Service Provider Interface
//!
//! Defines the data model and error types shared by every layer of the
//! temperature prediction stack.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{PredictError, Result};
pub use model::{
    ModelKind, PredictionOutcome, SimulationResult, TemperatureRecord, TrendLine,
};
