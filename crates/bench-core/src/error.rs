use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single CSV record is rejected by the aggregator.
///
/// These never abort a file: the offending line is reported and skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// The line has fewer comma-separated fields than the layout requires.
    #[error("expected at least 6 fields, found {found}")]
    TooFewFields { found: usize },

    /// The month column is not an integer.
    #[error("invalid month value: {0:?}")]
    InvalidMonth(String),

    /// The month column parsed, but is not in `1..=12`.
    #[error("month out of range: {0}")]
    MonthOutOfRange(i64),

    /// The temperature column is not a floating-point number.
    #[error("invalid temperature value: {0:?}")]
    InvalidTemperature(String),
}

/// All errors produced by the temperature benchmark.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured input directory does not exist or is not a directory.
    #[error("Input directory not found: {0}")]
    InputDirNotFound(PathBuf),

    /// Discovery found nothing to process; the run is aborted.
    #[error("No CSV files found in {0}")]
    NoInputFiles(PathBuf),

    /// The summary report could not be written.
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The worker pool runtime could not be built.
    #[error("Failed to start worker pool: {0}")]
    PoolStart(#[source] std::io::Error),

    /// More partitions were handed to the pool than it has worker slots.
    #[error("{partitions} partitions exceed worker capacity {capacity}")]
    TooManyPartitions { partitions: usize, capacity: usize },
}

/// Convenience alias used throughout the bench crates.
pub type Result<T> = std::result::Result<T, BenchError>;
