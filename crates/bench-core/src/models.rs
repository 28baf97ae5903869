use std::fmt;

use crate::formatting::{format_temperature, SEPARATOR};

/// Number of calendar months tracked per file.
pub const MONTHS_PER_YEAR: usize = 12;

/// One parsed CSV row: the month it belongs to and the reading itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRecord {
    /// Calendar month, always in `1..=12`.
    pub month: u8,
    /// Temperature reading in degrees.
    pub temperature: f64,
}

/// Finalised statistics for one month of one file.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthStats {
    /// Calendar month in `1..=12`.
    pub month: u8,
    /// Number of readings the statistics were computed from (never zero).
    pub count: usize,
    /// Unweighted arithmetic mean of the readings.
    pub mean: f64,
    /// Largest reading.
    pub max: f64,
    /// Smallest reading.
    pub min: f64,
}

/// Per-file result of the monthly aggregation.
///
/// Only months that received at least one valid reading are present, in
/// ascending month order.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    /// File name (without directory) as shown in the console block.
    pub file_name: String,
    pub months: Vec<MonthStats>,
    /// Number of data lines that were rejected and skipped.
    pub records_skipped: usize,
}

impl FileSummary {
    /// Look up the statistics for `month`, if that month had any readings.
    pub fn month(&self, month: u8) -> Option<&MonthStats> {
        self.months.iter().find(|m| m.month == month)
    }
}

impl fmt::Display for FileSummary {
    /// Renders the human-readable console block for this file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Arquivo: {}", self.file_name)?;
        for stats in &self.months {
            writeln!(f, "Mes: {}", stats.month)?;
            writeln!(f, "Temperatura Media: {}", format_temperature(stats.mean))?;
            writeln!(f, "Temperatura Maxima: {}", format_temperature(stats.max))?;
            writeln!(f, "Temperatura Minima: {}", format_temperature(stats.min))?;
            writeln!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}

/// Wall-clock duration of one benchmark round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTiming {
    /// 1-based round number.
    pub round: usize,
    pub elapsed_millis: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> FileSummary {
        FileSummary {
            file_name: "recife.csv".to_string(),
            months: vec![
                MonthStats {
                    month: 1,
                    count: 2,
                    mean: 15.0,
                    max: 20.0,
                    min: 10.0,
                },
                MonthStats {
                    month: 7,
                    count: 1,
                    mean: 22.12345,
                    max: 22.12345,
                    min: 22.12345,
                },
            ],
            records_skipped: 0,
        }
    }

    #[test]
    fn test_file_summary_month_lookup() {
        let s = summary();
        assert_eq!(s.month(1).map(|m| m.count), Some(2));
        assert!(s.month(2).is_none());
    }

    #[test]
    fn test_file_summary_display_block() {
        let rendered = summary().to_string();
        let expected = "Arquivo: recife.csv\n\
                        Mes: 1\n\
                        Temperatura Media: 15.000\n\
                        Temperatura Maxima: 20.000\n\
                        Temperatura Minima: 10.000\n\
                        ------------------------------------\n\
                        Mes: 7\n\
                        Temperatura Media: 22.123\n\
                        Temperatura Maxima: 22.123\n\
                        Temperatura Minima: 22.123\n\
                        ------------------------------------\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_file_summary_display_without_months() {
        let s = FileSummary {
            file_name: "vazio.csv".to_string(),
            months: vec![],
            records_skipped: 3,
        };
        assert_eq!(s.to_string(), "Arquivo: vazio.csv\n");
    }
}
