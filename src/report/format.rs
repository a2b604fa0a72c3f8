//! Text rendering for the overview and daily reports.
//!
//! We keep formatting code in one place so output changes are localized.
//! Celsius values are always printed with one decimal place (`20.0°C`).

use crate::convert::format_temperature;
use crate::domain::{DailyEntry, DayRecord, Overview};
use crate::error::Result;

use super::{compute_overview, daily_entries};

/// Multi-day overview for `records`. Empty input is an `EmptySeries` error.
pub fn generate_summary(records: &[DayRecord]) -> Result<String> {
    Ok(format_overview(&compute_overview(records)?))
}

/// One block per record, in input order. Empty input yields an empty string.
pub fn generate_daily_summary(records: &[DayRecord]) -> Result<String> {
    Ok(format_daily(&daily_entries(records)?))
}

pub fn format_overview(overview: &Overview) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} Day Overview\n", overview.days));
    out.push_str(&format!(
        "  The lowest temperature will be {}, and will occur on {}.\n",
        celsius(overview.lowest.celsius),
        overview.lowest.date
    ));
    out.push_str(&format!(
        "  The highest temperature will be {}, and will occur on {}.\n",
        celsius(overview.highest.celsius),
        overview.highest.date
    ));
    out.push_str(&format!(
        "  The average low this week is {}.\n",
        celsius(overview.average_low_c)
    ));
    out.push_str(&format!(
        "  The average high this week is {}.\n",
        celsius(overview.average_high_c)
    ));
    out
}

pub fn format_daily(entries: &[DailyEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("---- {} ----\n", entry.date));
        out.push_str(&format!("  Minimum Temperature: {}\n", celsius(entry.min_c)));
        out.push_str(&format!("  Maximum Temperature: {}\n", celsius(entry.max_c)));
        out.push('\n');
    }
    out
}

fn celsius(v: f64) -> String {
    format_temperature(format!("{v:.1}"))
}
