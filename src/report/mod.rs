//! Reporting: the numbers behind each report, plus text rendering (`format`).
//!
//! Statistics run on the raw Fahrenheit columns; every value is converted to
//! Celsius only once it has been selected for display.

use crate::convert::{convert_date, convert_f_to_c};
use crate::domain::{DailyEntry, DatedTemperature, DayRecord, Overview};
use crate::error::{Result, WeatherError};
use crate::stats::{calculate_mean, find_max, find_min};

pub mod format;

pub use format::*;

/// Aggregate all records into an [`Overview`].
///
/// Ties on the lowest/highest value resolve to the latest day.
pub fn compute_overview(records: &[DayRecord]) -> Result<Overview> {
    let lows: Vec<i32> = records.iter().map(|r| r.min_temp_f).collect();
    let highs: Vec<i32> = records.iter().map(|r| r.max_temp_f).collect();

    let lowest = find_min(&lows).ok_or(WeatherError::EmptySeries { what: "minimum" })?;
    let highest = find_max(&highs).ok_or(WeatherError::EmptySeries { what: "maximum" })?;

    Ok(Overview {
        days: records.len(),
        lowest: DatedTemperature {
            celsius: convert_f_to_c(lowest.value)?,
            date: convert_date(&records[lowest.index].date)?,
        },
        highest: DatedTemperature {
            celsius: convert_f_to_c(highest.value)?,
            date: convert_date(&records[highest.index].date)?,
        },
        average_low_c: convert_f_to_c(calculate_mean(&lows)?)?,
        average_high_c: convert_f_to_c(calculate_mean(&highs)?)?,
    })
}

/// One entry per record, in input order.
pub fn daily_entries(records: &[DayRecord]) -> Result<Vec<DailyEntry>> {
    records
        .iter()
        .map(|r| {
            Ok(DailyEntry {
                date: convert_date(&r.date)?,
                min_c: convert_f_to_c(r.min_temp_f)?,
                max_c: convert_f_to_c(r.max_temp_f)?,
            })
        })
        .collect()
}
