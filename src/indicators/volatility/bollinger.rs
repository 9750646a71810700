//! Bollinger Bands indicator

use crate::common::math;
use crate::models::{BollingerPoint, PricePoint};

/// Calculate the Bollinger Bands series, aligned 1:1 with the input.
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
pub fn bollinger_series(
    prices: &[PricePoint],
    period: usize,
    std_dev: f64,
) -> Vec<Option<BollingerPoint>> {
    let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();
    let middle = math::rolling_mean(&closes, period);
    let std = math::rolling_std_dev(&closes, period);

    middle
        .into_iter()
        .zip(std)
        .map(|bands| match bands {
            (Some(middle), Some(std)) => Some(BollingerPoint {
                upper: middle + std_dev * std,
                middle,
                lower: middle - std_dev * std,
            }),
            _ => None,
        })
        .collect()
}

/// Bollinger Bands series with default parameters (20 SMA, 2σ).
pub fn bollinger_series_default(prices: &[PricePoint]) -> Vec<Option<BollingerPoint>> {
    bollinger_series(prices, 20, 2.0)
}
