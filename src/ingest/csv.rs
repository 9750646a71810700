//! CSV price loader: `Date` and `Close` columns, one row per trading
//! period. Rows are sorted by date on load; duplicate dates are rejected
//! so the engine never sees an ambiguous series.

use crate::models::PricePoint;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unparseable date {value:?}")]
    BadDate { row: usize, value: String },
    #[error("row {row}: close is not a finite number")]
    BadClose { row: usize },
    #[error("duplicate date {date} in input")]
    DuplicateDate { date: NaiveDate },
    #[error("input contains no data rows")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close")]
    close: f64,
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

fn parse_date(value: &str, row: usize) -> Result<NaiveDate, IngestError> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value.trim(), fmt).ok())
        .ok_or_else(|| IngestError::BadDate {
            row,
            value: value.to_string(),
        })
}

/// Read a price series from CSV, sorted ascending by date.
pub fn read_prices<R: Read>(reader: R) -> Result<Vec<PricePoint>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut prices = Vec::new();

    for (i, record) in csv_reader.deserialize::<RawRecord>().enumerate() {
        // Header is row 1, first data row is row 2.
        let row = i + 2;
        let record = record?;
        if !record.close.is_finite() {
            return Err(IngestError::BadClose { row });
        }
        let date = parse_date(&record.date, row)?;
        prices.push(PricePoint::new(date, record.close));
    }

    if prices.is_empty() {
        return Err(IngestError::Empty);
    }

    prices.sort_by_key(|p| p.date);
    for pair in prices.windows(2) {
        if pair[0].date == pair[1].date {
            return Err(IngestError::DuplicateDate { date: pair[0].date });
        }
    }

    Ok(prices)
}
