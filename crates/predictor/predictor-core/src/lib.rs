//! Predictor Core Implementations
//!
//! The prediction engine behind the tempora CLI, organized by concern:
//!
//! - [`regression`]: least-squares fit primitives (line and degree-2 curve)
//! - [`models`]: the three prediction strategies
//! - [`heuristics`]: dampening and distance-based confidence decay
//! - [`guard`]: plausibility envelope validation
//! - [`trend`]: trend-line generation for charting
//! - [`simulation`]: the orchestrating state machine
//!
//! ## Example
//!
//! ```rust
//! use predictor_core::prelude::*;
//!
//! let series: Vec<TemperatureRecord> = (1993..=2022)
//!     .map(|y| TemperatureRecord::new(y, 26.5, 26.5))
//!     .collect();
//!
//! let result = Simulation::new(2024).run(&series, ModelKind::Linear, 2040);
//! assert!(result.outcome.error_message.is_none());
//! assert!((result.outcome.predicted_temperature - 26.5).abs() < 0.01);
//! ```

pub mod guard;
pub mod heuristics;
pub mod models;
pub mod regression;
pub mod simulation;
pub mod trend;

// Re-export from SPI
pub use predictor_spi::{
    ModelKind, PredictError, PredictionOutcome, Result, SimulationResult, TemperatureRecord,
    TrendLine,
};

pub use simulation::{Simulation, SimulationState, MAX_TARGET_YEAR, MIN_TARGET_YEAR};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::guard::PlausibilityEnvelope;
    pub use crate::models;
    pub use crate::regression::{fit_linear, fit_quadratic, LinearFit, QuadraticFit};
    pub use crate::simulation::{Simulation, SimulationState};
    pub use crate::trend::build_trend_line;
    pub use predictor_spi::{
        ModelKind, PredictError, PredictionOutcome, Result, SimulationResult, TemperatureRecord,
        TrendLine,
    };
}
