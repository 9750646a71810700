//! Unit tests for the CSV price loader

use chrono::NaiveDate;
use crossline::ingest::{read_prices, IngestError};

#[test]
fn test_reads_date_and_close_columns() {
    let csv = "Date,Close\n2024-01-02,101.5\n2024-01-03,102.25\n";
    let prices = read_prices(csv.as_bytes()).unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(prices[0].close, 101.5);
}

#[test]
fn test_ignores_extra_columns() {
    let csv = "Date,Open,High,Low,Close,Volume\n2024-01-02,1,2,0.5,1.5,1000\n";
    let prices = read_prices(csv.as_bytes()).unwrap();
    assert_eq!(prices[0].close, 1.5);
}

#[test]
fn test_sorts_rows_by_date() {
    let csv = "Date,Close\n2024-01-05,105.0\n2024-01-02,102.0\n2024-01-03,103.0\n";
    let prices = read_prices(csv.as_bytes()).unwrap();
    let dates: Vec<_> = prices.iter().map(|p| p.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(prices[0].close, 102.0);
}

#[test]
fn test_accepts_us_date_format() {
    let csv = "Date,Close\n01/02/2024,99.0\n01/03/2024,100.0\n";
    let prices = read_prices(csv.as_bytes()).unwrap();
    assert_eq!(prices[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
}

#[test]
fn test_rejects_bad_date() {
    let csv = "Date,Close\nnot-a-date,100.0\n";
    let err = read_prices(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, IngestError::BadDate { row: 2, .. }));
}

#[test]
fn test_rejects_non_numeric_close() {
    let csv = "Date,Close\n2024-01-02,abc\n";
    assert!(matches!(
        read_prices(csv.as_bytes()),
        Err(IngestError::Csv(_))
    ));
}

#[test]
fn test_rejects_duplicate_dates() {
    let csv = "Date,Close\n2024-01-02,100.0\n2024-01-02,101.0\n";
    let err = read_prices(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, IngestError::DuplicateDate { .. }));
}

#[test]
fn test_rejects_empty_input() {
    let csv = "Date,Close\n";
    assert!(matches!(read_prices(csv.as_bytes()), Err(IngestError::Empty)));
}
