//! Per-file monthly temperature aggregation.
//!
//! Reads one city file, collects its readings into twelve monthly buckets and
//! reduces every non-empty bucket to mean / max / min.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bench_core::error::{BenchError, Result};
use bench_core::models::{FileSummary, MonthStats, TemperatureRecord, MONTHS_PER_YEAR};
use tracing::debug;

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::reader::parse_record;

// ── MonthlyBuckets ────────────────────────────────────────────────────────────

/// Raw readings of one file grouped by month, in the order they were read.
///
/// All twelve months are always present; most may simply be empty.
#[derive(Debug, Clone, Default)]
pub struct MonthlyBuckets {
    readings: [Vec<f64>; MONTHS_PER_YEAR],
}

impl MonthlyBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading to its month's bucket.
    pub fn push(&mut self, record: TemperatureRecord) {
        self.readings[usize::from(record.month) - 1].push(record.temperature);
    }

    /// Readings collected for `month` (1-based). Out-of-range months are empty.
    pub fn readings(&self, month: u8) -> &[f64] {
        usize::from(month)
            .checked_sub(1)
            .and_then(|idx| self.readings.get(idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of readings across all months.
    pub fn len(&self) -> usize {
        self.readings.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reduce every non-empty month to its statistics, in month order.
    pub fn summarize(&self) -> Vec<MonthStats> {
        self.readings
            .iter()
            .zip(1u8..)
            .filter_map(|(values, month)| month_stats(month, values))
            .collect()
    }
}

/// Mean / max / min of one month, or `None` when there are no readings.
fn month_stats(month: u8, values: &[f64]) -> Option<MonthStats> {
    let (&first, rest) = values.split_first()?;

    let (min, max) = rest.iter().fold((first, first), |(lo, hi), &v| {
        (
            if v.total_cmp(&lo).is_lt() { v } else { lo },
            if v.total_cmp(&hi).is_gt() { v } else { hi },
        )
    });
    let sum: f64 = values.iter().sum();

    Some(MonthStats {
        month,
        count: values.len(),
        mean: sum / values.len() as f64,
        max,
        min,
    })
}

// ── File aggregation ──────────────────────────────────────────────────────────

/// Aggregate one file, reporting skipped records through `tracing`.
pub fn aggregate_file(path: &Path) -> Result<FileSummary> {
    aggregate_file_with(path, &TracingDiagnostics)
}

/// Aggregate one file, reporting skipped records to `diagnostics`.
///
/// The first line is a header and is never parsed. Malformed data lines are
/// reported and skipped. Bytes that are not valid UTF-8 are replaced rather
/// than failing the line; only an I/O failure aborts this file with
/// [`BenchError::FileRead`].
pub fn aggregate_file_with<D>(path: &Path, diagnostics: &D) -> Result<FileSummary>
where
    D: Diagnostics + ?Sized,
{
    let file_name = display_name(path);
    let read_error = |source: std::io::Error| BenchError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = BufReader::new(File::open(path).map_err(read_error)?);
    let mut buckets = MonthlyBuckets::new();
    let mut records_skipped = 0usize;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(read_error)? == 0 {
            break;
        }
        line_no += 1;
        if line_no == 1 {
            continue;
        }

        let line = decode_line(&buf);
        match parse_record(&line) {
            Ok(record) => buckets.push(record),
            Err(e) => {
                records_skipped += 1;
                diagnostics.record_skipped(&file_name, line_no, &line, &e);
            }
        }
    }

    debug!(
        "File {}: {} readings, {} skipped",
        file_name,
        buckets.len(),
        records_skipped
    );

    Ok(FileSummary {
        file_name,
        months: buckets.summarize(),
        records_skipped,
    })
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Name shown for `path` in the console block and in diagnostics.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
