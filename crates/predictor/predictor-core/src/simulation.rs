//! Simulation orchestrator
//!
//! The top-level entry point walks a small state machine per run: validate
//! the target year, dispatch to the selected model, check the plausibility
//! envelope, then build the trend line. Every fault is recovered into a
//! well-formed rejected outcome; a run never panics on user input.
//!
//! The orchestrator keeps no memory between runs. Re-running on a model
//! switch is the caller's concern.

use predictor_spi::{
    ModelKind, PredictionOutcome, SimulationResult, TemperatureRecord, TrendLine,
};

use crate::guard::PlausibilityEnvelope;
use crate::heuristics;
use crate::models;
use crate::trend;

/// Earliest target year a run will accept.
pub const MIN_TARGET_YEAR: i32 = 2024;

/// Latest target year a run will accept.
pub const MAX_TARGET_YEAR: i32 = 2100;

/// Message for targets before [`MIN_TARGET_YEAR`].
pub const INVALID_YEAR_MESSAGE: &str =
    "Please select a year from 2024 onwards for predictions.";

/// Message for targets past [`MAX_TARGET_YEAR`].
pub const INVALID_YEAR_UPPER_MESSAGE: &str =
    "Please select a year no later than 2100 for predictions.";

/// Message for predictions outside the plausibility envelope.
pub const OUT_OF_RANGE_MESSAGE: &str = "Prediction falls outside realistic range";

/// Message for any computational fault.
pub const CALCULATION_ERROR_MESSAGE: &str = "Calculation error occurred";

/// The states a simulation run moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Idle,
    Validating,
    Computing,
    Validated,
    Rejected,
    Done,
}

/// A configured simulation runner.
///
/// Holds only the calendar year treated as "now"; each [`run`](Self::run)
/// is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct Simulation {
    current_year: i32,
}

impl Simulation {
    /// Create a runner anchored at the given calendar year.
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// The calendar year horizon heuristics measure from.
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Execute one simulation run.
    pub fn run(
        &self,
        series: &[TemperatureRecord],
        kind: ModelKind,
        target_year: i32,
    ) -> SimulationResult {
        let mut state = SimulationState::Idle;
        let mut outcome = PredictionOutcome::empty();
        let mut trend_line = TrendLine::default();

        loop {
            state = match state {
                SimulationState::Idle => SimulationState::Validating,

                SimulationState::Validating => {
                    if target_year < MIN_TARGET_YEAR {
                        outcome = PredictionOutcome::rejected(INVALID_YEAR_MESSAGE);
                        SimulationState::Rejected
                    } else if target_year > MAX_TARGET_YEAR {
                        outcome = PredictionOutcome::rejected(INVALID_YEAR_UPPER_MESSAGE);
                        SimulationState::Rejected
                    } else if series.is_empty() {
                        outcome = PredictionOutcome::rejected(CALCULATION_ERROR_MESSAGE);
                        SimulationState::Rejected
                    } else {
                        SimulationState::Computing
                    }
                }

                SimulationState::Computing => {
                    match models::predict(kind, series, target_year, self.current_year) {
                        Ok(candidate) => {
                            let horizon =
                                heuristics::years_into_future(target_year, self.current_year);
                            let envelope = PlausibilityEnvelope::from_series(series, horizon);
                            if envelope.check(candidate.predicted_temperature).is_ok() {
                                outcome = candidate;
                                SimulationState::Validated
                            } else {
                                outcome = PredictionOutcome::rejected(OUT_OF_RANGE_MESSAGE);
                                SimulationState::Rejected
                            }
                        }
                        Err(_) => {
                            outcome = PredictionOutcome::rejected(CALCULATION_ERROR_MESSAGE);
                            SimulationState::Rejected
                        }
                    }
                }

                SimulationState::Validated => {
                    trend_line = trend::build_trend_line(
                        series,
                        kind,
                        target_year,
                        outcome.predicted_temperature,
                        self.current_year,
                    );
                    SimulationState::Done
                }

                SimulationState::Rejected => SimulationState::Done,

                SimulationState::Done => break,
            };
        }

        SimulationResult {
            outcome,
            trend_line,
        }
    }
}
