//! Data ingestion layer for the temperature benchmark.
//!
//! Responsible for discovering the per-city CSV files, parsing their records
//! and reducing each file to monthly temperature statistics.

pub mod aggregator;
pub mod diagnostics;
pub mod reader;

pub use bench_core as core;
