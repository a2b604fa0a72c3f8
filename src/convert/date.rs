//! ISO-8601 date-time parsing and long-form rendering.

use chrono::{DateTime, FixedOffset};

use crate::error::{Result, WeatherError};

/// Input format: `YYYY-MM-DDTHH:MM:SS±HH:MM`. The colon in the offset is required.
pub const ISO_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Output format, e.g. `Tuesday 06 July 2021`.
pub const LONG_DATE_FORMAT: &str = "%A %d %B %Y";

/// Parse an ISO date-time with an explicit offset.
///
/// The layout is checked byte by byte first: `chrono` alone would also take
/// single-digit fields, `+0000` offsets and stray whitespace.
pub fn parse_iso_datetime(iso: &str) -> Result<DateTime<FixedOffset>> {
    if !has_iso_shape(iso) {
        return Err(WeatherError::DateParse {
            input: iso.to_string(),
            reason: "malformed layout".to_string(),
        });
    }
    DateTime::parse_from_str(iso, ISO_INPUT_FORMAT).map_err(|e| WeatherError::DateParse {
        input: iso.to_string(),
        reason: e.to_string(),
    })
}

// `YYYY-MM-DDTHH:MM:SS±HH:MM`, exactly 25 ASCII bytes.
fn has_iso_shape(iso: &str) -> bool {
    let bytes = iso.as_bytes();
    bytes.len() == 25
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 | 22 => b == b':',
            19 => b == b'+' || b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Render an ISO date-time as `<weekday> <dd> <month> <yyyy>`.
///
/// The calendar date is taken in the string's own offset, not converted to UTC.
pub fn convert_date(iso: &str) -> Result<String> {
    let dt = parse_iso_datetime(iso)?;
    Ok(dt.format(LONG_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_long_form() {
        assert_eq!(
            convert_date("2021-07-06T07:00:00+00:00").unwrap(),
            "Tuesday 06 July 2021"
        );
        assert_eq!(
            convert_date("2020-02-29T23:59:59+00:00").unwrap(),
            "Saturday 29 February 2020"
        );
    }

    #[test]
    fn keeps_local_calendar_date() {
        // 23:30 at +10:00 is still the 6th locally, even though it is the 6th 13:30 UTC.
        assert_eq!(
            convert_date("2021-07-06T23:30:00+10:00").unwrap(),
            "Tuesday 06 July 2021"
        );
        // 01:00 at -05:00 is the 5th locally but the 6th in UTC.
        assert_eq!(
            convert_date("2021-07-05T01:00:00-05:00").unwrap(),
            "Monday 05 July 2021"
        );
    }

    #[test]
    fn shape_check() {
        assert!(has_iso_shape("2021-07-06T07:00:00+00:00"));
        assert!(has_iso_shape("2021-07-06T07:00:00-05:30"));
        assert!(!has_iso_shape("2021-07-06T07:00:00+00:0"));
        assert!(!has_iso_shape("2021-07-06T07:00:00+00:001"));
        assert!(!has_iso_shape("2021-07-06T07:00:00\u{2212}00:00"));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in [
            "2021-07-06",
            "2021-07-06T07:00:00",
            "2021/07/06T07:00:00+00:00",
            "2021-07-06 07:00:00+00:00",
            "2021-13-06T07:00:00+00:00",
            "2021-07-06T07:00:00+00:00 extra",
            "yesterday",
            "2021-07-06T07:00:00+0000",
            "2021-7-6T7:0:0+00:00",
            "2021-07-06T07:00:00 +00:00",
            " 2021-07-06T07:00:00+00:00",
            "2021-07-06T07:00:00Z",
            "2021-07-06t07:00:00+00:00",
        ] {
            let err = convert_date(bad).unwrap_err();
            assert!(
                matches!(err, WeatherError::DateParse { ref input, .. } if input == bad),
                "expected DateParse for {bad:?}"
            );
        }
    }
}
