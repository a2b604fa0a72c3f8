use std::io::Write;

use weather_summary::{
    DayRecord, WeatherError, generate_daily_summary, generate_summary, load_data_from_csv, load_records_from_reader,
};

const EXAMPLE: &str = "\
date,min,max
2021-07-02T07:00:00+08:00,49,67
2021-07-03T07:00:00+08:00,57,68
2021-07-04T07:00:00+08:00,56,62
2021-07-05T07:00:00+08:00,55,61
2021-07-06T07:00:00+08:00,53,62

";

fn write_csv(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn overview_from_file() {
    let file = write_csv(EXAMPLE);
    let records = load_data_from_csv(file.path()).unwrap();

    assert_eq!(
        generate_summary(&records).unwrap(),
        "5 Day Overview\n  \
         The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.\n  \
         The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.\n  \
         The average low this week is 12.2°C.\n  \
         The average high this week is 17.8°C.\n"
    );
}

#[test]
fn daily_from_file() {
    let file = write_csv(EXAMPLE);
    let records = load_data_from_csv(file.path()).unwrap();
    let daily = generate_daily_summary(&records).unwrap();

    let blocks: Vec<&str> = daily.split("\n\n").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), 5);
    assert_eq!(
        blocks[4],
        "---- Tuesday 06 July 2021 ----\n  Minimum Temperature: 11.7°C\n  Maximum Temperature: 16.7°C"
    );
}

#[test]
fn rows_survive_a_load_round_trip() {
    let rows = [
        ("2021-07-02T07:00:00+08:00", 49, 67),
        ("1999-12-31T23:59:59-11:30", -12, 0),
        ("2024-02-29T00:00:00+14:00", 101, 115),
    ];
    let mut text = String::from("date,min,max\n");
    for (date, min, max) in rows {
        text.push_str(&format!("{date},{min},{max}\n"));
    }

    let records = load_records_from_reader(text.as_bytes(), "rows").unwrap();
    let rebuilt: Vec<(&str, i32, i32)> = records
        .iter()
        .map(|r| (r.date.as_str(), r.min_temp_f, r.max_temp_f))
        .collect();

    assert_eq!(rebuilt, rows.to_vec());
}

#[test]
fn header_only_file_has_no_overview() {
    let file = write_csv("date,min,max\n\n");
    let records = load_data_from_csv(file.path()).unwrap();
    assert!(records.is_empty());

    assert!(matches!(
        generate_summary(&records).unwrap_err(),
        WeatherError::EmptySeries { .. }
    ));
    assert_eq!(generate_daily_summary(&records).unwrap(), "");
}

#[test]
fn bad_row_reports_line() {
    let file = write_csv("date,min,max\n2021-07-02T07:00:00+08:00,cold,67\n");
    let err = load_data_from_csv(file.path()).unwrap_err();
    assert!(err.to_string().contains("line 2"), "{err}");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn single_record_is_its_own_extreme_and_average() {
    let records = vec![DayRecord::new("2021-07-05T07:00:00+00:00", 59, 68)];
    let summary = generate_summary(&records).unwrap();
    assert!(summary.starts_with("1 Day Overview\n"));
    assert!(summary.contains("lowest temperature will be 15.0°C, and will occur on Monday 05 July 2021."));
    assert!(summary.contains("highest temperature will be 20.0°C, and will occur on Monday 05 July 2021."));
    assert!(summary.contains("average low this week is 15.0°C."));
    assert!(summary.contains("average high this week is 20.0°C."));
}
