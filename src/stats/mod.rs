//! Summary statistics over numeric series.
//!
//! Values are coerced to `f64` before any comparison, so integer columns and
//! float columns behave identically.
//!
//! Tie-break: when the extreme value occurs more than once, `find_min` and
//! `find_max` report the index of the **last** occurrence.

use crate::domain::Extremum;
use crate::error::{Result, WeatherError};

/// Arithmetic mean. An empty series is an error rather than `NaN`.
pub fn calculate_mean<T: Copy + Into<f64>>(series: &[T]) -> Result<f64> {
    if series.is_empty() {
        return Err(WeatherError::EmptySeries { what: "mean" });
    }
    let total: f64 = series.iter().map(|&v| v.into()).sum();
    Ok(total / series.len() as f64)
}

/// Minimum value and the index of its last occurrence; `None` for an empty series.
pub fn find_min<T: Copy + Into<f64>>(series: &[T]) -> Option<Extremum> {
    let values = to_f64(series);
    let value = values.iter().copied().fold(f64::INFINITY, f64::min);
    last_index_of(&values, value)
}

/// Maximum value and the index of its last occurrence; `None` for an empty series.
pub fn find_max<T: Copy + Into<f64>>(series: &[T]) -> Option<Extremum> {
    let values = to_f64(series);
    let value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    last_index_of(&values, value)
}

fn to_f64<T: Copy + Into<f64>>(series: &[T]) -> Vec<f64> {
    series.iter().map(|&v| v.into()).collect()
}

// `None` when the series is empty or holds nothing but NaN.
fn last_index_of(values: &[f64], value: f64) -> Option<Extremum> {
    let index = values.iter().rposition(|&v| v == value)?;
    Some(Extremum { value, index })
}
