//! # tempora
//!
//! Command-line interface for annual temperature predictions.

use chrono::Datelike;
use clap::{Parser, Subcommand};
use data::{CsvSource, SeriesSource};
use predictor_facade::prelude::*;
use std::fs::File;
use std::path::PathBuf;

mod chart;
mod export;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "tempora")]
#[command(about = "Annual temperature prediction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a prediction and print the outcome
    Simulate {
        /// Target year for the prediction
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(2024..=2100))]
        year: i32,

        /// Model (polynomial, linear, moving-average)
        #[arg(short, long, default_value = "polynomial")]
        model: String,

        /// Input CSV with Year, Annual Mean, 5-Year Smooth columns
        /// (bundled dataset when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the full result as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the calendar year treated as the present
        #[arg(long, hide = true)]
        current_year: Option<i32>,
    },

    /// Run a prediction and write the CSV export payload
    Export {
        /// Target year for the prediction
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(2024..=2100))]
        year: i32,

        /// Model (polynomial, linear, moving-average)
        #[arg(short, long, default_value = "polynomial")]
        model: String,

        /// Input CSV with Year, Annual Mean, 5-Year Smooth columns
        /// (bundled dataset when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the calendar year treated as the present
        #[arg(long, hide = true)]
        current_year: Option<i32>,
    },

    /// Run a prediction and write the chart rendering payload as JSON
    Chart {
        /// Target year for the prediction
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(2024..=2100))]
        year: i32,

        /// Model (polynomial, linear, moving-average)
        #[arg(short, long, default_value = "polynomial")]
        model: String,

        /// Input CSV with Year, Annual Mean, 5-Year Smooth columns
        /// (bundled dataset when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the calendar year treated as the present
        #[arg(long, hide = true)]
        current_year: Option<i32>,
    },
}

/// Load the historical series, substituting the bundled dataset when the
/// input is missing, unreadable, or empty.
fn load_series(input: Option<&PathBuf>) -> Vec<TemperatureRecord> {
    match input {
        Some(path) => {
            let source = CsvSource::new(path);
            match source.fetch() {
                Ok(records) if !records.is_empty() => data::normalize_series(records),
                Ok(_) => {
                    eprintln!("Input file has no rows; using the bundled dataset");
                    data::fallback_series()
                }
                Err(e) => {
                    eprintln!("Failed to load input ({}); using the bundled dataset", e);
                    data::fallback_series()
                }
            }
        }
        None => data::fallback_series(),
    }
}

fn resolve_current_year(flag: Option<i32>) -> i32 {
    flag.unwrap_or_else(|| chrono::Utc::now().year())
}

fn run_simulation(
    year: i32,
    model: &str,
    input: Option<&PathBuf>,
    current_year: Option<i32>,
) -> CliResult<(Vec<TemperatureRecord>, ModelKind, SimulationResult)> {
    let kind: ModelKind = model.parse()?;
    let series = load_series(input);
    let result = SimulationConfig::for_year(resolve_current_year(current_year))
        .simulation()
        .run(&series, kind, year);
    Ok((series, kind, result))
}

fn write_text(payload: &str, output: Option<&PathBuf>) -> CliResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, payload).map_err(|e| format!("Failed to write output: {}", e))?;
            println!("Written to {:?}", path);
        }
        None => print!("{}", payload),
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(value: &T, output: Option<&PathBuf>) -> CliResult<()> {
    match output {
        Some(path) => {
            let mut file =
                File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
            serde_json::to_writer_pretty(&mut file, value)
                .map_err(|e| format!("Failed to write JSON: {}", e))?;
            println!("Written to {:?}", path);
        }
        None => {
            let rendered = serde_json::to_string_pretty(value)
                .map_err(|e| format!("Failed to render JSON: {}", e))?;
            println!("{}", rendered);
        }
    }
    Ok(())
}

fn run_simulate(
    year: i32,
    model: String,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    current_year: Option<i32>,
) -> CliResult<()> {
    let (series, kind, result) = run_simulation(year, &model, input.as_ref(), current_year)?;
    println!(
        "Loaded {} records ({}-{})",
        series.len(),
        series[0].year,
        series[series.len() - 1].year
    );

    match &result.outcome.error_message {
        Some(message) => println!("Rejected: {}", message),
        None => {
            println!("Model: {}", kind);
            println!(
                "Predicted annual mean for {}: {:.2}\u{b0}C",
                year, result.outcome.predicted_temperature
            );
            println!("Confidence: {:.1}%", result.outcome.confidence * 100.0);
            if let Some(equation) = &result.outcome.model_equation {
                println!("Equation: {}", equation);
            }
            if !result.outcome.details.is_empty() {
                println!("Details:");
                for detail in &result.outcome.details {
                    println!("  {}", detail);
                }
            }
            println!("Trend line:");
            for (y, t) in result
                .trend_line
                .years
                .iter()
                .zip(&result.trend_line.temperatures)
            {
                println!("  {}: {:.2}\u{b0}C", y, t);
            }
        }
    }

    if output.is_some() {
        write_json(&result, output.as_ref())?;
    }

    Ok(())
}

fn run_export(
    year: i32,
    model: String,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    current_year: Option<i32>,
) -> CliResult<()> {
    let (series, _, result) = run_simulation(year, &model, input.as_ref(), current_year)?;
    let payload = export::render_export(&series, &result);
    write_text(&payload, output.as_ref())
}

fn run_chart(
    year: i32,
    model: String,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    current_year: Option<i32>,
) -> CliResult<()> {
    let (series, kind, result) = run_simulation(year, &model, input.as_ref(), current_year)?;
    let payload = chart::chart_data(&series, kind, &result);
    write_json(&payload, output.as_ref())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            year,
            model,
            input,
            output,
            current_year,
        } => run_simulate(year, model, input, output, current_year),

        Commands::Export {
            year,
            model,
            input,
            output,
            current_year,
        } => run_export(year, model, input, output, current_year),

        Commands::Chart {
            year,
            model,
            input,
            output,
            current_year,
        } => run_chart(year, model, input, output, current_year),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
