//! Shared building blocks for the temperature benchmark.
//!
//! Domain models, the error taxonomy, command-line settings and the text
//! formatting used by both the console output and the summary report.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
