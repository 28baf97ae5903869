//! Runtime layer for the temperature benchmark.
//!
//! Splits the discovered files into static partitions, runs one worker task
//! per partition on a bounded pool, times each round and writes the summary
//! report.

pub mod benchmark;
pub mod partitioner;
pub mod report;
pub mod worker_pool;

pub use bench_core as core;
pub use bench_data as data;
