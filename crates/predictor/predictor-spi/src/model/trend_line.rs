//! Trend line types for chart rendering.

use serde::{Deserialize, Serialize};

/// An ordered sequence of interpolated `(year, temperature)` points.
///
/// Both vectors are equal length and index-aligned. When non-empty, the
/// first point is the last historical record and the last point is the
/// target year's prediction. Recomputed on every run, never appended to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Year axis labels
    pub years: Vec<String>,
    /// Temperatures aligned to `years`
    pub temperatures: Vec<f64>,
}

impl TrendLine {
    /// Append a point, keeping the two vectors aligned.
    pub fn push(&mut self, year: i32, temperature: f64) {
        self.years.push(year.to_string());
        self.temperatures.push(temperature);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Whether the line holds no points.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_vectors_aligned() {
        let mut line = TrendLine::default();
        assert!(line.is_empty());

        line.push(2022, 27.19);
        line.push(2030, 27.40);

        assert_eq!(line.len(), 2);
        assert_eq!(line.years, vec!["2022", "2030"]);
        assert_eq!(line.temperatures.len(), line.years.len());
    }
}
