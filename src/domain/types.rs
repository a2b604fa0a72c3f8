//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built once by the loader and passed around by reference
//! - exported to JSON/CSV
//! - compared directly in tests

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One day of observations, exactly as read from the input.
///
/// Temperatures stay in Fahrenheit here; conversion happens only when a report
/// is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// ISO-8601 date-time with UTC offset, e.g. `2021-07-05T07:00:00+00:00`.
    pub date: String,
    pub min_temp_f: i32,
    pub max_temp_f: i32,
}

impl DayRecord {
    pub fn new(date: impl Into<String>, min_temp_f: i32, max_temp_f: i32) -> Self {
        Self {
            date: date.into(),
            min_temp_f,
            max_temp_f,
        }
    }
}

/// The extreme value of a series and the index of its *last* occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}

/// A Celsius value paired with the (formatted) date it was recorded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedTemperature {
    pub celsius: f64,
    pub date: String,
}

/// Aggregate numbers behind the overview report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub days: usize,
    pub lowest: DatedTemperature,
    pub highest: DatedTemperature,
    pub average_low_c: f64,
    pub average_high_c: f64,
}

/// One block of the daily report.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub date: String,
    pub min_c: f64,
    pub max_c: f64,
}

/// Which report(s) to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// The multi-day overview only.
    Overview,
    /// One block per day only.
    Daily,
    /// Overview followed by the daily blocks.
    All,
}

impl ReportMode {
    pub fn includes_overview(self) -> bool {
        matches!(self, ReportMode::Overview | ReportMode::All)
    }

    pub fn includes_daily(self) -> bool {
        matches!(self, ReportMode::Daily | ReportMode::All)
    }
}

/// Resolved settings for one run of the binary.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub csv_path: PathBuf,
    pub mode: ReportMode,
    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_mode_sections() {
        assert!(ReportMode::All.includes_overview());
        assert!(ReportMode::All.includes_daily());
        assert!(!ReportMode::Daily.includes_overview());
        assert!(!ReportMode::Overview.includes_daily());
    }

    #[test]
    fn day_record_serializes_with_field_names() {
        let record = DayRecord::new("2021-07-05T07:00:00+00:00", 49, 67);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2021-07-05T07:00:00+00:00","min_temp_f":49,"max_temp_f":67}"#
        );
    }
}
