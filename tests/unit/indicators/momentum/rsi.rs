//! Unit tests for the RSI series

use chrono::{Days, NaiveDate};
use crossline::indicators::momentum::{rsi_series, rsi_series_default};
use crossline::models::PricePoint;

fn make_prices(closes: &[f64]) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::new(start.checked_add_days(Days::new(i as u64)).unwrap(), close))
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    let prices = make_prices(&[1.0, 2.0, 3.0]);
    let rsi = rsi_series(&prices, 14);
    assert_eq!(rsi.len(), prices.len());
    assert!(rsi.iter().all(Option::is_none));
}

#[test]
fn test_rsi_defined_from_period_index() {
    let closes: Vec<f64> = (1..=30).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
    let prices = make_prices(&closes);
    let rsi = rsi_series(&prices, 14);

    for (i, value) in rsi.iter().enumerate() {
        assert_eq!(value.is_some(), i >= 14, "rsi at index {i}");
    }
}

#[test]
fn test_rsi_all_gains_is_100() {
    let closes: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let prices = make_prices(&closes);
    let rsi = rsi_series(&prices, 5);
    assert_eq!(rsi[10], Some(100.0));
}

#[test]
fn test_rsi_stays_in_range() {
    let closes: Vec<f64> = (1..=60)
        .map(|i| 50.0 + (i as f64 * 1.3).sin() * 5.0)
        .collect();
    let prices = make_prices(&closes);
    for value in rsi_series_default(&prices).into_iter().flatten() {
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn test_rsi_balanced_moves_near_50() {
    // Alternating +1/-1 moves: equal average gain and loss.
    let closes: Vec<f64> = (0..21)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    let prices = make_prices(&closes);
    let rsi = rsi_series(&prices, 4);
    assert!((rsi[20].unwrap() - 50.0).abs() < 1e-9);
}
