//! Export records to CSV and the overview to JSON.
//!
//! The CSV export uses the same `date,min,max` layout the loader reads, so an
//! exported file can be fed straight back into `wx`.

use std::fs::File;
use std::path::Path;

use crate::domain::{DayRecord, Overview};
use crate::error::{Result, WeatherError};

/// Write records as a `date,min,max` CSV file.
pub fn write_records_csv(path: &Path, records: &[DayRecord]) -> Result<()> {
    let export_err = |message: String| WeatherError::Export {
        path: path.to_path_buf(),
        message,
    };

    let mut writer = csv::Writer::from_path(path).map_err(|e| export_err(e.to_string()))?;

    writer
        .write_record(["date", "min", "max"])
        .map_err(|e| export_err(format!("header: {e}")))?;

    for record in records {
        let min = record.min_temp_f.to_string();
        let max = record.max_temp_f.to_string();
        writer
            .write_record([record.date.as_str(), min.as_str(), max.as_str()])
            .map_err(|e| export_err(format!("row '{}': {e}", record.date)))?;
    }

    writer.flush().map_err(|e| export_err(e.to_string()))?;
    Ok(())
}

/// Write the overview as pretty-printed JSON.
pub fn write_overview_json(path: &Path, overview: &Overview) -> Result<()> {
    let file = File::create(path).map_err(|e| WeatherError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::to_writer_pretty(file, overview).map_err(|e| WeatherError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}
