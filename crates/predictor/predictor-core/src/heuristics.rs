//! Horizon heuristics shared by the regression-based models
//!
//! Far-future extrapolation is tempered two ways: predicted *change* is
//! dampened before it is applied, and reported *confidence* decays with
//! distance from the present. Constants are calibrated against annual
//! temperature series on the 24-28 degree scale.

/// Horizon within which confidence is not decayed at all.
pub const MAX_CONFIDENT_YEARS: i32 = 15;

/// Longest supported horizon; decay bottoms out here.
pub const MAX_PREDICTION_YEARS: i32 = 76;

/// Years between the current calendar year and the target, floored at zero.
pub fn years_into_future(target_year: i32, current_year: i32) -> i32 {
    (target_year - current_year).max(0)
}

/// Multiplier in `[0.2, 1]` shrinking predicted deviation for far targets.
pub fn dampening_factor(years_into_future: i32) -> f64 {
    (1.0 - (years_into_future as f64 / 50.0).powf(0.8)).max(0.2)
}

/// Secondary multiplier tempering large predicted swings.
///
/// Warming swings shrink toward 0.3; cooling swings are allowed to stretch
/// up to 1.7.
pub fn adjustment_factor(predicted_change: f64) -> f64 {
    if predicted_change > 0.0 {
        (1.0 - predicted_change / 10.0).max(0.3)
    } else {
        (1.0 - predicted_change / 10.0).min(1.7)
    }
}

/// Distance-based confidence multiplier.
///
/// Unity within [`MAX_CONFIDENT_YEARS`]; beyond that it falls along a
/// sub-linear curve and floors at 0.25 once the horizon reaches
/// [`MAX_PREDICTION_YEARS`].
pub fn decay_multiplier(years_into_future: i32) -> f64 {
    if years_into_future <= MAX_CONFIDENT_YEARS {
        return 1.0;
    }
    let span = (MAX_PREDICTION_YEARS - MAX_CONFIDENT_YEARS) as f64;
    let decay = ((years_into_future - MAX_CONFIDENT_YEARS) as f64 / span).powf(0.7);
    (1.0 - decay * 0.75).max(0.25)
}

/// Apply the decay multiplier to a raw R-squared and clamp into `[0, 1]`.
pub fn decayed_confidence(raw_r_squared: f64, years_into_future: i32) -> f64 {
    (raw_r_squared * decay_multiplier(years_into_future)).clamp(0.0, 1.0)
}

/// R-squared adjusted for degrees of freedom with `p` fitted parameters.
///
/// The adjustment denominator `n - p - 1` is non-positive for tiny windows;
/// those fall back to the raw value.
pub fn adjusted_r_squared(r_squared: f64, n: usize, p: usize) -> f64 {
    if n <= p + 1 {
        return r_squared;
    }
    1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / (n as f64 - p as f64 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_identity_within_confident_horizon() {
        for years in 0..=MAX_CONFIDENT_YEARS {
            assert_eq!(decay_multiplier(years), 1.0);
        }
    }

    #[test]
    fn test_decay_floors_at_quarter_at_max_horizon() {
        assert!((decay_multiplier(MAX_PREDICTION_YEARS) - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_decay_is_monotonic() {
        let mut last = 1.0;
        for years in 16..=76 {
            let m = decay_multiplier(years);
            assert!(m <= last);
            last = m;
        }
    }

    #[test]
    fn test_decayed_confidence_clamped() {
        assert_eq!(decayed_confidence(1.5, 0), 1.0);
        assert_eq!(decayed_confidence(-0.2, 0), 0.0);
        assert!((decayed_confidence(0.8, 10) - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_dampening_bounds() {
        assert_eq!(dampening_factor(0), 1.0);
        // At 50 years the raw curve reaches zero and the floor takes over.
        assert!((dampening_factor(50) - 0.2).abs() < 1e-10);
        assert!((dampening_factor(76) - 0.2).abs() < 1e-10);
    }

    #[test]
    fn test_adjustment_factor_warming_floor() {
        assert!((adjustment_factor(1.0) - 0.9).abs() < 1e-10);
        assert!((adjustment_factor(9.0) - 0.3).abs() < 1e-10);
        assert!((adjustment_factor(20.0) - 0.3).abs() < 1e-10);
    }

    #[test]
    fn test_adjustment_factor_cooling_ceiling() {
        assert!((adjustment_factor(-1.0) - 1.1).abs() < 1e-10);
        assert!((adjustment_factor(-20.0) - 1.7).abs() < 1e-10);
    }

    #[test]
    fn test_adjusted_r_squared_penalizes_small_windows() {
        let adjusted = adjusted_r_squared(0.9, 30, 2);
        assert!(adjusted < 0.9);
        assert!((adjusted - (1.0 - 0.1 * 29.0 / 27.0)).abs() < 1e-10);
    }

    #[test]
    fn test_adjusted_r_squared_tiny_window_falls_back() {
        assert_eq!(adjusted_r_squared(0.7, 3, 2), 0.7);
    }

    #[test]
    fn test_years_into_future_floors_at_zero() {
        assert_eq!(years_into_future(2024, 2026), 0);
        assert_eq!(years_into_future(2050, 2026), 24);
    }
}
