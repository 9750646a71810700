//! Unit tests for windowed arithmetic helpers

use crossline::common::math::{ema_from_previous, ema_series, rolling_mean, rolling_std_dev, sma};

#[test]
fn test_sma_insufficient_data() {
    assert!(sma(&[1.0, 2.0], 3).is_none());
}

#[test]
fn test_sma_trailing_window() {
    assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0], 2), Some(3.5));
}

#[test]
fn test_rolling_mean_alignment() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let means = rolling_mean(&values, 3);
    assert_eq!(means.len(), values.len());
    assert!(means[0].is_none());
    assert!(means[1].is_none());
    assert_eq!(means[2], Some(2.0));
    assert_eq!(means[3], Some(3.0));
    assert_eq!(means[4], Some(4.0));
}

#[test]
fn test_rolling_mean_window_longer_than_input() {
    let means = rolling_mean(&[1.0, 2.0], 5);
    assert!(means.iter().all(Option::is_none));
}

#[test]
fn test_rolling_mean_zero_period() {
    let means = rolling_mean(&[1.0, 2.0, 3.0], 0);
    assert!(means.iter().all(Option::is_none));
}

#[test]
fn test_rolling_std_dev_constant_series() {
    let std = rolling_std_dev(&[5.0; 10], 4);
    assert_eq!(std[3], Some(0.0));
    assert_eq!(std[9], Some(0.0));
}

#[test]
fn test_rolling_std_dev_sample_variance() {
    // window [1, 2, 3, 4]: mean 2.5, sample variance 5/3
    let std = rolling_std_dev(&[1.0, 2.0, 3.0, 4.0], 4);
    let expected = (5.0_f64 / 3.0).sqrt();
    assert!((std[3].unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_ema_from_previous_alpha() {
    // period 3 gives alpha 0.5
    let next = ema_from_previous(10.0, 4.0, 3);
    assert!((next - 7.0).abs() < 1e-12);
}

#[test]
fn test_ema_series_seeded_by_sma() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let ema = ema_series(&values, 3);
    assert!(ema[0].is_none());
    assert!(ema[1].is_none());
    assert_eq!(ema[2], Some(2.0));
    // alpha 0.5: 4 * 0.5 + 2 * 0.5
    assert_eq!(ema[3], Some(3.0));
}
