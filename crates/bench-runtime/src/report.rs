//! Flat-text summary of a benchmark run.

use std::path::Path;

use bench_core::error::{BenchError, Result};
use bench_core::formatting::{format_mean_line, format_round_line};
use bench_core::models::RoundTiming;

/// Per-round timings of a finished run, in round order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    rounds: Vec<RoundTiming>,
}

impl BenchmarkReport {
    pub fn new(rounds: Vec<RoundTiming>) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> &[RoundTiming] {
        &self.rounds
    }

    /// Integer mean of the per-round times; `0` when no round was recorded.
    pub fn mean_millis(&self) -> u64 {
        if self.rounds.is_empty() {
            return 0;
        }
        let total: u64 = self.rounds.iter().map(|r| r.elapsed_millis).sum();
        total / self.rounds.len() as u64
    }

    /// One line per round followed by the mean line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for timing in &self.rounds {
            out.push_str(&format_round_line(timing));
            out.push('\n');
        }
        out.push_str(&format_mean_line(self.mean_millis()));
        out.push('\n');
        out
    }

    /// Write the rendered report to `path`, replacing any previous content.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render()).map_err(|source| BenchError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
