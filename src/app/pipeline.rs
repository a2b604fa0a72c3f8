//! Shared "report pipeline" logic.
//!
//! Keeping this in one place keeps the workflow testable without the CLI:
//! CSV load -> overview/daily computation -> rendering -> optional exports

use tracing::{info, warn};

use crate::domain::{DailyEntry, DayRecord, Overview, ReportConfig, ReportMode};
use crate::error::Result;
use crate::io::export::{write_overview_json, write_records_csv};
use crate::io::ingest::load_data_from_csv;
use crate::report::{compute_overview, daily_entries, format_daily, format_overview};

/// All computed outputs of a single `wx` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub mode: ReportMode,
    pub records: Vec<DayRecord>,
    pub overview: Option<Overview>,
    pub daily: Vec<DailyEntry>,
}

impl RunOutput {
    /// Render the requested sections, overview first.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(overview) = self.overview.as_ref().filter(|_| self.mode.includes_overview()) {
            out.push_str(&format_overview(overview));
        }
        if self.mode.includes_daily() && !self.daily.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format_daily(&self.daily));
        }
        out
    }
}

/// Load the configured CSV, compute the requested reports, and write exports.
pub fn run_report(config: &ReportConfig) -> Result<RunOutput> {
    let records = load_data_from_csv(&config.csv_path)?;
    info!(
        path = %config.csv_path.display(),
        days = records.len(),
        "loaded weather data"
    );

    let output = build_output(records, config)?;

    if let Some(path) = &config.export_csv {
        write_records_csv(path, &output.records)?;
        info!(path = %path.display(), "wrote records CSV");
    }
    if let (Some(path), Some(overview)) = (&config.export_json, &output.overview) {
        write_overview_json(path, overview)?;
        info!(path = %path.display(), "wrote overview JSON");
    }

    Ok(output)
}

/// Compute the report data for already-loaded records.
///
/// The overview is computed when it is printed or exported; with no records it
/// fails with `EmptySeries`.
pub fn build_output(records: Vec<DayRecord>, config: &ReportConfig) -> Result<RunOutput> {
    if records.is_empty() {
        warn!(path = %config.csv_path.display(), "no weather records found");
    }

    let overview = if config.mode.includes_overview() || config.export_json.is_some() {
        Some(compute_overview(&records)?)
    } else {
        None
    };

    let daily = if config.mode.includes_daily() {
        daily_entries(&records)?
    } else {
        Vec::new()
    };

    Ok(RunOutput {
        mode: config.mode,
        records,
        overview,
        daily,
    })
}
