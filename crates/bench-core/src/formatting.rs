//! Text rendering shared by the console output and the summary report.

use crate::models::RoundTiming;

/// Line printed after every month block in the console output.
pub const SEPARATOR: &str = "------------------------------------";

/// Format a temperature with exactly three decimal places.
///
/// # Examples
///
/// ```
/// use bench_core::formatting::format_temperature;
///
/// assert_eq!(format_temperature(15.0), "15.000");
/// assert_eq!(format_temperature(-3.14159), "-3.142");
/// ```
pub fn format_temperature(value: f64) -> String {
    format!("{:.3}", value)
}

/// Console line emitted as soon as a round finishes.
pub fn format_round_progress(timing: &RoundTiming) -> String {
    format!(
        "Tempo de execucao da rodada {}: {} ms",
        timing.round, timing.elapsed_millis
    )
}

/// Report line recorded for one round.
pub fn format_round_line(timing: &RoundTiming) -> String {
    format!(
        "Tempo da rodada {}: {} ms",
        timing.round, timing.elapsed_millis
    )
}

/// Final line with the mean round time, used on the console and in the report.
pub fn format_mean_line(mean_millis: u64) -> String {
    format!("Tempo medio de execucao: {} ms", mean_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_temperature_rounds_to_three_places() {
        assert_eq!(format_temperature(10.0), "10.000");
        assert_eq!(format_temperature(0.0005), "0.001");
        assert_eq!(format_temperature(-12.3456), "-12.346");
    }

    #[test]
    fn test_round_lines() {
        let timing = RoundTiming {
            round: 3,
            elapsed_millis: 125,
        };
        assert_eq!(format_round_line(&timing), "Tempo da rodada 3: 125 ms");
        assert_eq!(
            format_round_progress(&timing),
            "Tempo de execucao da rodada 3: 125 ms"
        );
    }

    #[test]
    fn test_mean_line() {
        assert_eq!(format_mean_line(42), "Tempo medio de execucao: 42 ms");
    }
}
