mod bootstrap;

use anyhow::Result;
use bench_core::settings::Settings;
use bench_runtime::benchmark::{Benchmark, BenchmarkConfig};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Temperature bench v{} starting", env!("CARGO_PKG_VERSION"));

    let bench = Benchmark::new(BenchmarkConfig::from(&settings));
    let config = bench.config();
    tracing::info!(
        "Input: {}, workers: {}, rounds: {}, report: {}",
        config.input_dir.display(),
        config.workers,
        config.rounds,
        config.report_path.display()
    );

    let report = bench.run()?;
    tracing::info!(
        rounds = report.rounds().len(),
        mean_millis = report.mean_millis(),
        "benchmark finished"
    );

    Ok(())
}
