//! Historical series sources
//!
//! Supplies the ordered `{year, annual_mean, five_year_smooth}` series the
//! prediction engine consumes: a CSV-backed source for real datasets and a
//! bundled fallback sample used whenever a source fails or yields nothing.
//! The engine never learns which source supplied its input.

pub mod fallback;
pub mod source;

pub use fallback::fallback_series;
pub use source::{CsvSource, DataError, SeriesSource};

use predictor_spi::TemperatureRecord;

/// Fetch from a source, substituting the bundled fallback on failure or an
/// empty result. Recovery happens here, one level above the engine.
pub fn load_series(source: &dyn SeriesSource) -> Vec<TemperatureRecord> {
    match source.fetch() {
        Ok(records) if !records.is_empty() => normalize_series(records),
        _ => fallback_series(),
    }
}

/// Sort ascending by year and drop duplicate years, upholding the ordering
/// invariant the engine assumes.
pub fn normalize_series(mut records: Vec<TemperatureRecord>) -> Vec<TemperatureRecord> {
    records.sort_by_key(|r| r.year);
    records.dedup_by_key(|r| r.year);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl SeriesSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(&self) -> Result<Vec<TemperatureRecord>, DataError> {
            Err(DataError::Empty)
        }
    }

    struct EmptySource;

    impl SeriesSource for EmptySource {
        fn name(&self) -> &str {
            "empty"
        }

        fn fetch(&self) -> Result<Vec<TemperatureRecord>, DataError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_failing_source_substitutes_fallback() {
        let series = load_series(&FailingSource);
        assert_eq!(series, fallback_series());
    }

    #[test]
    fn test_empty_source_substitutes_fallback() {
        let series = load_series(&EmptySource);
        assert_eq!(series, fallback_series());
    }

    #[test]
    fn test_normalize_sorts_and_dedups() {
        let records = vec![
            TemperatureRecord::new(2020, 27.0, 27.0),
            TemperatureRecord::new(2018, 26.0, 26.0),
            TemperatureRecord::new(2020, 27.5, 27.5),
            TemperatureRecord::new(2019, 26.5, 26.5),
        ];

        let normalized = normalize_series(records);
        let years: Vec<i32> = normalized.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2018, 2019, 2020]);
    }
}
