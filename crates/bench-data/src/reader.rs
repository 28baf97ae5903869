//! CSV file discovery and record parsing.
//!
//! Lists the per-city CSV files of the input directory and turns one data
//! line into a [`TemperatureRecord`].

use std::path::{Path, PathBuf};

use bench_core::error::{BenchError, RecordError};
use bench_core::models::{TemperatureRecord, MONTHS_PER_YEAR};
use bench_core::settings::CSV_EXTENSION;
use tracing::{debug, warn};

/// Minimum number of comma-separated fields in a data line.
pub const MIN_FIELDS: usize = 6;

/// 0-based column holding the month number.
pub const MONTH_FIELD: usize = 2;

/// 0-based column holding the temperature reading.
pub const TEMPERATURE_FIELD: usize = 5;

// ── Discovery ─────────────────────────────────────────────────────────────────

/// Find the `.csv` files directly inside `dir`, sorted by path.
pub fn find_csv_files(dir: &Path) -> Vec<PathBuf> {
    find_files_with_extension(dir, CSV_EXTENSION)
}

/// Find the regular files directly inside `dir` whose name ends in
/// `.{extension}` (case-insensitive), sorted by path.
///
/// A missing directory, or a path that is not a directory, is reported and
/// yields an empty list.
pub fn find_files_with_extension(dir: &Path, extension: &str) -> Vec<PathBuf> {
    if !dir.is_dir() {
        warn!("{}", BenchError::InputDirNotFound(dir.to_path_buf()));
        return Vec::new();
    }

    let suffix = format!(".{}", extension.to_lowercase());

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_string_lossy()
                    .to_lowercase()
                    .ends_with(&suffix)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();

    debug!("Discovered {} files in {}", files.len(), dir.display());
    files
}

// ── Records ───────────────────────────────────────────────────────────────────

/// Parse one data line into a [`TemperatureRecord`].
///
/// The month is read from column [`MONTH_FIELD`] and must be an integer in
/// `1..=12`; the temperature is read from column [`TEMPERATURE_FIELD`] and
/// may carry surrounding whitespace.
pub fn parse_record(line: &str) -> Result<TemperatureRecord, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(RecordError::TooFewFields {
            found: fields.len(),
        });
    }

    let raw_month = fields[MONTH_FIELD];
    let month: i64 = raw_month
        .parse()
        .map_err(|_| RecordError::InvalidMonth(raw_month.to_string()))?;

    let raw_temperature = fields[TEMPERATURE_FIELD];
    let temperature: f64 = raw_temperature
        .trim()
        .parse()
        .map_err(|_| RecordError::InvalidTemperature(raw_temperature.to_string()))?;

    let month = u8::try_from(month)
        .ok()
        .filter(|m| (1..=MONTHS_PER_YEAR as u8).contains(m))
        .ok_or(RecordError::MonthOutOfRange(month))?;

    Ok(TemperatureRecord { month, temperature })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
