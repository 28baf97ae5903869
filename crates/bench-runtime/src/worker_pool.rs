//! Bounded worker pool running one blocking task per partition.
//!
//! Each call to [`WorkerPool::run`] builds a fresh tokio runtime whose
//! blocking pool is capped at the pool capacity, spawns one
//! `spawn_blocking` task per [`Partition`] into a [`JoinSet`], and blocks the
//! caller until every task has finished. The runtime is torn down before
//! `run` returns, so nothing outlives the round.

use std::path::PathBuf;
use std::sync::Arc;

use bench_core::error::{BenchError, Result};
use tokio::task::JoinSet;

use crate::partitioner::Partition;

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// What one worker task reports back after walking its partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionOutcome {
    pub files_aggregated: usize,
    pub files_failed: usize,
    pub records_skipped: usize,
}

/// All partition outcomes of one round folded together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Tasks that returned normally.
    pub tasks_completed: usize,
    /// Tasks that panicked; their partition's remaining files were not processed.
    pub tasks_panicked: usize,
    pub files_aggregated: usize,
    pub files_failed: usize,
    pub records_skipped: usize,
}

impl RoundOutcome {
    fn record(&mut self, partial: PartitionOutcome) {
        self.tasks_completed += 1;
        self.files_aggregated += partial.files_aggregated;
        self.files_failed += partial.files_failed;
        self.records_skipped += partial.records_skipped;
    }
}

// ── WorkerPool ────────────────────────────────────────────────────────────────

/// A fixed number of worker slots.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    capacity: usize,
}

impl WorkerPool {
    /// Create a pool with `capacity` worker slots (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Run `task` once per partition, in parallel, and wait for all of them.
    ///
    /// `task` receives the partition's worker slot and its slice of `files`.
    /// A panicking task is logged and counted in
    /// [`RoundOutcome::tasks_panicked`]; the pool still waits for every other
    /// task. There is no timeout.
    pub fn run<F>(
        &self,
        files: Arc<[PathBuf]>,
        partitions: Vec<Partition>,
        task: F,
    ) -> Result<RoundOutcome>
    where
        F: Fn(usize, &[PathBuf]) -> PartitionOutcome + Send + Sync + 'static,
    {
        if partitions.len() > self.capacity {
            return Err(BenchError::TooManyPartitions {
                partitions: partitions.len(),
                capacity: self.capacity,
            });
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .max_blocking_threads(self.capacity)
            .thread_name("temperature-worker")
            .build()
            .map_err(BenchError::PoolStart)?;

        let task = Arc::new(task);
        let dispatched = partitions.len();

        let outcome = runtime.block_on(async move {
            let mut tasks = JoinSet::new();
            for part in partitions {
                let files = Arc::clone(&files);
                let task = Arc::clone(&task);
                tasks.spawn_blocking(move || (*task)(part.worker, &files[part.range]));
            }

            let mut outcome = RoundOutcome::default();
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(partial) => outcome.record(partial),
                    Err(e) => {
                        tracing::error!(error = %e, "worker task did not complete");
                        outcome.tasks_panicked += 1;
                    }
                }
            }
            outcome
        });

        tracing::debug!(
            dispatched,
            completed = outcome.tasks_completed,
            panicked = outcome.tasks_panicked,
            "worker pool joined"
        );

        Ok(outcome)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
