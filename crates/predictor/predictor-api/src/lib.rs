//! Predictor Consumer API
//!
//! Consumer configuration and convenience re-exports for the prediction
//! stack.
//!
//! This crate provides:
//! - [`SimulationConfig`] for anchoring runs at a calendar year
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use predictor_core::{
    guard, heuristics, models, regression, simulation, trend, Simulation, SimulationState,
    MAX_TARGET_YEAR, MIN_TARGET_YEAR,
};

// Re-export the shared data model from SPI
pub use predictor_spi::{
    ModelKind, PredictError, PredictionOutcome, Result, SimulationResult, TemperatureRecord,
    TrendLine,
};

use serde::{Deserialize, Serialize};

/// Configuration for simulation runs.
///
/// The engine itself is pure; the one piece of ambient context it needs is
/// which calendar year counts as "now" for the horizon heuristics. Callers
/// with a clock supply it here (the CLI uses the system date), tests pin it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Calendar year treated as the present
    pub current_year: i32,
}

impl SimulationConfig {
    /// Anchor runs at the given calendar year.
    pub fn for_year(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Build the runner for this configuration.
    pub fn simulation(&self) -> Simulation {
        Simulation::new(self.current_year)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::SimulationConfig;
    pub use predictor_core::{
        models, Simulation, SimulationState, MAX_TARGET_YEAR, MIN_TARGET_YEAR,
    };
    pub use predictor_spi::{
        ModelKind, PredictError, PredictionOutcome, Result, SimulationResult, TemperatureRecord,
        TrendLine,
    };
}
