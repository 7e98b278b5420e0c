pub mod predict_error;

pub use predict_error::{PredictError, Result};
