//! Series source trait and the CSV-backed implementation.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use predictor_spi::TemperatureRecord;
use thiserror::Error;

/// Errors that can occur while fetching a historical series
#[derive(Error, Debug)]
pub enum DataError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// A cell could not be parsed as a number
    #[error("Failed to parse {field} on row {row}: '{value}'")]
    Parse {
        field: &'static str,
        row: usize,
        value: String,
    },

    /// The source produced no records
    #[error("Source returned no records")]
    Empty,
}

/// Trait for sources that can supply the historical series.
pub trait SeriesSource {
    /// Source name, for reporting.
    fn name(&self) -> &str;

    /// Fetch the full series.
    fn fetch(&self) -> Result<Vec<TemperatureRecord>, DataError>;
}

/// CSV-file source.
///
/// Expects a header row naming a year column, an annual-mean column, and a
/// five-year-smooth column; a few header spellings are accepted.
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Create a source reading from the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeriesSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(&self) -> Result<Vec<TemperatureRecord>, DataError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        let year_idx = find_column(&headers, &["year"])?;
        let mean_idx = find_column(&headers, &["annual mean", "annual_mean", "annualmean", "mean"])?;
        let smooth_idx = find_column(
            &headers,
            &["5-year smooth", "five_year_smooth", "five-year smooth", "smooth"],
        )?;

        let mut records = Vec::new();
        for (row_number, result) in reader.records().enumerate() {
            let row = result?;
            records.push(TemperatureRecord::new(
                parse_cell(&row, year_idx, "year", row_number)?,
                parse_cell(&row, mean_idx, "annual mean", row_number)?,
                parse_cell(&row, smooth_idx, "5-year smooth", row_number)?,
            ));
        }

        if records.is_empty() {
            return Err(DataError::Empty);
        }

        Ok(records)
    }
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        .ok_or_else(|| DataError::MissingColumn(names[0].to_string()))
}

fn parse_cell<T: std::str::FromStr>(
    row: &csv::StringRecord,
    index: usize,
    field: &'static str,
    row_number: usize,
) -> Result<T, DataError> {
    let raw = row.get(index).unwrap_or("").trim();
    raw.parse().map_err(|_| DataError::Parse {
        field,
        row: row_number + 1,
        value: raw.to_string(),
    })
}
