//! RSI (Relative Strength Index) indicator

use crate::models::PricePoint;

/// Calculate the RSI series, aligned 1:1 with the input.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are simple averages over the trailing `period` price
/// changes, so the series is defined from index `period`. A window with no
/// losses reads 100.
pub fn rsi_series(prices: &[PricePoint], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; prices.len()];
    if period == 0 || prices.len() <= period {
        return out;
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);
    for pair in prices.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    // changes[j] covers prices[j] -> prices[j + 1], so row i averages the
    // window of changes ending at i - 1.
    for i in period..prices.len() {
        let start = i - period;
        let avg_gain: f64 = gains[start..i].iter().sum::<f64>() / period as f64;
        let avg_loss: f64 = losses[start..i].iter().sum::<f64>() / period as f64;

        out[i] = Some(if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        });
    }
    out
}

/// RSI series with the default period (14).
pub fn rsi_series_default(prices: &[PricePoint]) -> Vec<Option<f64>> {
    rsi_series(prices, 14)
}
