//! Unit tests for CSV signal export

use chrono::NaiveDate;
use crossline::export::signal_table_csv;
use crossline::models::{IndicatorRow, Signal};

fn row(day: u32, signal: Signal) -> IndicatorRow {
    IndicatorRow {
        date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        close: 100.0 + day as f64,
        short_ma: Some(99.5),
        long_ma: Some(98.75),
        signal,
    }
}

#[test]
fn test_header_and_one_line_per_row() {
    let rows = vec![row(4, Signal::Buy), row(11, Signal::Sell)];
    let csv = signal_table_csv(&rows).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Close,Short_MA,Long_MA,Signal");
    assert!(lines[1].starts_with("2024-03-04,"));
    assert!(lines[1].ends_with(",Buy"));
    assert!(lines[2].ends_with(",Sell"));
}

#[test]
fn test_empty_table_is_header_only() {
    let csv = signal_table_csv(&[]).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_missing_averages_render_blank() {
    let mut r = row(7, Signal::Buy);
    r.short_ma = None;
    r.long_ma = None;
    let csv = signal_table_csv(&[r]).unwrap();
    let data_line = csv.lines().nth(1).unwrap();
    assert!(data_line.contains(",,,"));
}
