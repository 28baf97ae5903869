//! Round timer: repeats discover → partition → dispatch → join and records
//! how long each round takes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use bench_core::error::{BenchError, Result};
use bench_core::formatting::{format_mean_line, format_round_progress};
use bench_core::models::RoundTiming;
use bench_core::settings::Settings;
use bench_data::aggregator::{aggregate_file_with, display_name};
use bench_data::diagnostics::{Diagnostics, TracingDiagnostics};
use bench_data::reader::find_csv_files;
use tracing::{debug, error, info};

use crate::partitioner::partition;
use crate::report::BenchmarkReport;
use crate::worker_pool::{PartitionOutcome, WorkerPool};

// ── BenchmarkConfig ───────────────────────────────────────────────────────────

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub input_dir: PathBuf,
    /// Worker slots per round.
    pub workers: usize,
    pub rounds: usize,
    /// Report file, overwritten at the end of the run.
    pub report_path: PathBuf,
}

impl From<&Settings> for BenchmarkConfig {
    fn from(s: &Settings) -> Self {
        BenchmarkConfig {
            input_dir: s.input_dir.clone(),
            workers: s.workers as usize,
            rounds: s.rounds as usize,
            report_path: s.output.clone(),
        }
    }
}

// ── Benchmark ─────────────────────────────────────────────────────────────────

/// Drives the timed rounds and writes the report.
///
/// The round timings are owned here and only appended to after a round's
/// join has returned.
pub struct Benchmark<D = TracingDiagnostics> {
    config: BenchmarkConfig,
    diagnostics: Arc<D>,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_diagnostics(config, TracingDiagnostics)
    }
}

impl<D: Diagnostics + 'static> Benchmark<D> {
    pub fn with_diagnostics(config: BenchmarkConfig, diagnostics: D) -> Self {
        Self {
            config,
            diagnostics: Arc::new(diagnostics),
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run every round, print the mean, then write the report.
    ///
    /// Returns [`BenchError::NoInputFiles`] as soon as any round discovers no
    /// files; no report is written in that case. A report that cannot be
    /// written is logged and does not fail the run.
    pub fn run(&self) -> Result<BenchmarkReport> {
        let mut timings = Vec::with_capacity(self.config.rounds);

        for round in 1..=self.config.rounds {
            let timing = self.run_round(round)?;
            println!("{}", format_round_progress(&timing));
            timings.push(timing);
        }

        let report = BenchmarkReport::new(timings);
        println!("{}", format_mean_line(report.mean_millis()));

        let path = &self.config.report_path;
        match report.write_to(path) {
            Ok(()) => println!("Tempos de execucao salvos em {}", path.display()),
            Err(e) => error!("{}", e),
        }

        Ok(report)
    }

    /// One discover → partition → dispatch → join cycle.
    ///
    /// The timer covers discovery, partitioning, pool creation and the join.
    /// A round that finds no files records no time.
    pub fn run_round(&self, round: usize) -> Result<RoundTiming> {
        let started = Instant::now();
        let files = find_csv_files(&self.config.input_dir);
        if files.is_empty() {
            println!("Nenhum arquivo CSV encontrado para processar.");
            return Err(BenchError::NoInputFiles(self.config.input_dir.clone()));
        }

        let partitions = partition(files.len(), self.config.workers);
        debug!(
            round,
            files = files.len(),
            partitions = partitions.len(),
            "round prepared"
        );

        let files: Arc<[PathBuf]> = files.into();
        let diagnostics = Arc::clone(&self.diagnostics);

        let pool = WorkerPool::new(self.config.workers);
        let outcome = pool.run(files, partitions, move |worker, chunk| {
            aggregate_partition(worker, chunk, diagnostics.as_ref())
        })?;
        let elapsed = started.elapsed();

        info!(
            round,
            files_aggregated = outcome.files_aggregated,
            files_failed = outcome.files_failed,
            records_skipped = outcome.records_skipped,
            tasks_panicked = outcome.tasks_panicked,
            "round finished"
        );

        Ok(RoundTiming {
            round,
            elapsed_millis: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        })
    }
}

// ── Worker task ───────────────────────────────────────────────────────────────

/// Aggregate every file of one partition in order, printing each file's block.
///
/// A file that cannot be read is reported and skipped; the rest of the
/// partition is still processed.
pub fn aggregate_partition<D>(worker: usize, files: &[PathBuf], diagnostics: &D) -> PartitionOutcome
where
    D: Diagnostics + ?Sized,
{
    let mut outcome = PartitionOutcome::default();

    for path in files {
        match aggregate_file_with(path, diagnostics) {
            Ok(summary) => {
                // One print call holds the stdout lock for the whole block.
                println!("{}", summary);
                outcome.files_aggregated += 1;
                outcome.records_skipped += summary.records_skipped;
            }
            Err(e) => {
                diagnostics.file_failed(&display_name(path), &e);
                outcome.files_failed += 1;
            }
        }
    }

    debug!(worker, files = files.len(), "partition finished");
    outcome
}

// ── Tests ─────────────────────────────────────────────────────────────────────
