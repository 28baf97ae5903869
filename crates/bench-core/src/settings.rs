use clap::Parser;
use std::path::PathBuf;

// ── Defaults ───────────────────────────────────────────────────────────────────

/// Number of timed rounds in one run.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Worker-pool size used for every round.
pub const DEFAULT_WORKERS: u32 = 320;

/// Directory scanned for per-city CSV files.
pub const DEFAULT_INPUT_DIR: &str = "./temperaturas_cidades/temperaturas_cidades";

/// Summary report file, overwritten on every run.
pub const DEFAULT_REPORT_FILE: &str = "versao_experimento.txt";

/// Extension (case-insensitive, without the dot) of the files to aggregate.
pub const CSV_EXTENSION: &str = "csv";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Benchmark monthly temperature aggregation over a directory of city CSV files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "temperature-bench",
    about = "Benchmark monthly temperature aggregation over per-city CSV files",
    version
)]
pub struct Settings {
    /// Directory holding the per-city CSV files
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Number of concurrent workers per round
    #[arg(
        long,
        default_value_t = DEFAULT_WORKERS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub workers: u32,

    /// Number of timed rounds
    #[arg(
        long,
        default_value_t = DEFAULT_ROUNDS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub rounds: u32,

    /// Report file (overwritten)
    #[arg(long, default_value = DEFAULT_REPORT_FILE)]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);

        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }
}
