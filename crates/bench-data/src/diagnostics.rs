//! Single reporting point for everything the aggregation skips.

use bench_core::error::{BenchError, RecordError};

/// Receives a notice every time a record or a whole file is skipped.
///
/// Implementations are shared by all workers of a round.
pub trait Diagnostics: Send + Sync {
    /// A data line was rejected. `line_number` is 1-based and counts the header.
    fn record_skipped(&self, file_name: &str, line_number: usize, line: &str, error: &RecordError);

    /// A file could not be aggregated at all.
    fn file_failed(&self, file_name: &str, error: &BenchError);
}

/// Default sink: every notice becomes a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn record_skipped(&self, file_name: &str, line_number: usize, line: &str, error: &RecordError) {
        tracing::warn!(
            file = file_name,
            line = line_number,
            "Skipping invalid record {:?}: {}",
            line,
            error
        );
    }

    fn file_failed(&self, file_name: &str, error: &BenchError) {
        tracing::warn!(file = file_name, "Failed to aggregate file: {}", error);
    }
}
