//! Predictor Facade
//!
//! High-level API for the temperature prediction stack. Re-exports all
//! public types from the predictor crates for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use predictor_facade::prelude::*;
//!
//! let series: Vec<TemperatureRecord> = (1993..=2022)
//!     .map(|y| TemperatureRecord::new(y, 26.5, 26.5))
//!     .collect();
//!
//! let result = SimulationConfig::for_year(2024)
//!     .simulation()
//!     .run(&series, ModelKind::MovingAverage, 2035);
//! assert!(result.outcome.error_message.is_none());
//! ```

// Re-export everything from API (which includes SPI and core)
pub use predictor_api::*;

// Explicit re-exports for documentation
pub use predictor_api::prelude;

// Re-export core modules for direct access
pub use predictor_core::{guard, heuristics, models, regression, simulation, trend};

// Re-export the SPI data model
pub use predictor_spi::{
    ModelKind, PredictError, PredictionOutcome, Result, SimulationResult, TemperatureRecord,
    TrendLine,
};
