// mod.rs - Result series writers

pub mod histogram;

pub use histogram::{Bin, Histogram, DEFAULT_BINS};

use crate::core::ResultSeries;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Output format for a written series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}. Use: tsv, csv, json", s)),
        }
    }
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| {
                format!("Failed to create parent directory '{}': {}", parent.display(), e)
            })?;
    }
    Ok(())
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn label<'a>(labels: &'a [String], index: usize) -> &'a str {
    labels.get(index).map(String::as_str).unwrap_or("")
}

/// Write one labelled trial as delimited text
pub fn write_delimited(
    file_path: &str,
    delimiter: u8,
    trial: &str,
    series: &ResultSeries,
    labels: &[String],
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut out = BufWriter::new(file);

    // Write command header
    writeln!(out, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(out, "# Generated: {}", timestamp()).map_err(|e| format!("Write error: {}", e))?;
    writeln!(out, "# seqdist v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;
    writeln!(out, "# Trial: {}", trial).map_err(|e| format!("Write error: {}", e))?;

    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(out);
    writer
        .write_record(["pair", "left", "right", "distance"])
        .map_err(|e| format!("Write error: {}", e))?;
    for (i, entry) in series.entries.iter().enumerate() {
        writer
            .write_record(&[
                (i + 1).to_string(),
                label(labels, entry.left).to_string(),
                label(labels, entry.right).to_string(),
                entry.distance.to_string(),
            ])
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Distance series written to: {}", file_path);
    Ok(())
}

#[derive(Serialize)]
struct JsonPair<'a> {
    left: &'a str,
    right: &'a str,
    distance: usize,
}

#[derive(Serialize)]
struct JsonSeries<'a> {
    command: &'a str,
    generated: String,
    version: &'static str,
    trial: &'a str,
    pairs: Vec<JsonPair<'a>>,
    histogram: Histogram,
}

/// Write one labelled trial as a JSON document, histogram included
pub fn write_json(
    file_path: &str,
    trial: &str,
    series: &ResultSeries,
    labels: &[String],
    bins: usize,
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let document = JsonSeries {
        command: command_line,
        generated: timestamp(),
        version: env!("CARGO_PKG_VERSION"),
        trial,
        pairs: series
            .entries
            .iter()
            .map(|e| JsonPair {
                left: label(labels, e.left),
                right: label(labels, e.right),
                distance: e.distance,
            })
            .collect(),
        histogram: Histogram::from_values(&series.distances(), bins),
    };

    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document)
        .map_err(|e| format!("Failed to serialize series: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Distance series written to: {} (JSON format)", file_path);
    Ok(())
}

/// Write a series in the specified format
pub fn write_series(
    file_path: &str,
    format: OutputFormat,
    trial: &str,
    series: &ResultSeries,
    labels: &[String],
    bins: usize,
    command_line: &str,
) -> Result<(), String> {
    match format {
        OutputFormat::Tsv => write_delimited(file_path, b'\t', trial, series, labels, command_line),
        OutputFormat::Csv => write_delimited(file_path, b',', trial, series, labels, command_line),
        OutputFormat::Json => write_json(file_path, trial, series, labels, bins, command_line),
    }
}

/// Print the series, summary statistics and a text histogram to stdout
pub fn print_report(trial: &str, series: &ResultSeries, bins: usize) {
    println!("\n📊 === {} ===", trial.to_uppercase());
    println!("{:?}", series.distances());
    match (series.min(), series.max(), series.mean()) {
        (Some(min), Some(max), Some(mean)) => {
            println!("  • Pairs compared: {}", series.len());
            println!("  • Min / max distance: {} / {}", min, max);
            println!("  • Mean distance: {:.1}", mean);
            print!("{}", Histogram::from_values(&series.distances(), bins).render());
        }
        _ => println!("  • No pairs compared"),
    }
}
