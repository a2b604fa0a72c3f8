//! CSV ingest.
//!
//! This module turns a `date,min,max` CSV into a list of `DayRecord`s.
//!
//! Design goals:
//! - **Strict values**: a temperature that is not an integer stops the load with
//!   the offending line, never a silent zero
//! - **Lenient layout**: empty lines are skipped, surrounding whitespace is trimmed
//! - **One pass**: the whole source is read eagerly and then released

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::DayRecord;
use crate::error::{Result, WeatherError};

const DATE_COL: usize = 0;
const MIN_COL: usize = 1;
const MAX_COL: usize = 2;
const REQUIRED_FIELDS: usize = 3;

/// Load every data row of the CSV file at `path`.
pub fn load_data_from_csv(path: impl AsRef<Path>) -> Result<Vec<DayRecord>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|source| WeatherError::SourceUnavailable {
        source_name: source_name.clone(),
        source,
    })?;
    load_records_from_reader(file, &source_name)
}

/// Load every data row from any reader. `source_name` labels error messages.
///
/// Exactly one header row is discarded.
pub fn load_records_from_reader<R: Read>(reader: R, source_name: &str) -> Result<Vec<DayRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Force the header row to be consumed so a missing/unreadable header is
    // reported even when there are no data rows.
    reader
        .headers()
        .map_err(|e| map_csv_error(e, source_name, 1))?;

    // The csv reader already drops empty lines; anything else with a field
    // (even a whitespace-only line) must be a full row.
    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header, and lines are 1-based.
        let fallback_line = idx as u64 + 2;
        let row = result.map_err(|e| map_csv_error(e, source_name, fallback_line))?;
        let line = row.position().map(|p| p.line()).unwrap_or(fallback_line);
        records.push(parse_row(&row, source_name, line)?);
    }

    debug!(source = source_name, rows = records.len(), "loaded weather records");

    Ok(records)
}

fn parse_row(row: &StringRecord, source_name: &str, line: u64) -> Result<DayRecord> {
    if row.len() < REQUIRED_FIELDS {
        return Err(WeatherError::DataFormat {
            source_name: source_name.to_string(),
            line,
            message: format!(
                "expected {REQUIRED_FIELDS} fields (date, min, max), found {}",
                row.len()
            ),
        });
    }

    let date = row.get(DATE_COL).unwrap_or_default().to_string();
    let min_temp_f = parse_temperature(row, MIN_COL, "min", source_name, line)?;
    let max_temp_f = parse_temperature(row, MAX_COL, "max", source_name, line)?;

    Ok(DayRecord {
        date,
        min_temp_f,
        max_temp_f,
    })
}

fn parse_temperature(row: &StringRecord, col: usize, name: &str, source_name: &str, line: u64) -> Result<i32> {
    let raw = row.get(col).unwrap_or_default();
    raw.parse::<i32>().map_err(|_| WeatherError::DataFormat {
        source_name: source_name.to_string(),
        line,
        message: format!("`{name}` temperature '{raw}' is not an integer"),
    })
}

fn map_csv_error(err: csv::Error, source_name: &str, fallback_line: u64) -> WeatherError {
    let line = err
        .position()
        .map(|p| p.line())
        .unwrap_or(fallback_line);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => WeatherError::SourceUnavailable {
            source_name: source_name.to_string(),
            source,
        },
        _ => WeatherError::DataFormat {
            source_name: source_name.to_string(),
            line,
            message,
        },
    }
}
