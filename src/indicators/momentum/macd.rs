//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::{MacdPoint, PricePoint};

/// Calculate the MACD series, aligned 1:1 with the input.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD line
/// Histogram = MACD - Signal
///
/// The MACD line is defined from index `slow_period - 1`; the signal line
/// and histogram need a further `signal_period - 1` points.
pub fn macd_series(
    prices: &[PricePoint],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Vec<Option<MacdPoint>> {
    let mut out = vec![None; prices.len()];
    if fast_period == 0 || signal_period == 0 || fast_period >= slow_period {
        return out;
    }
    if prices.len() < slow_period {
        return out;
    }

    let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();
    let fast = math::ema_series(&closes, fast_period);
    let slow = math::ema_series(&closes, slow_period);

    let macd_start = slow_period - 1;
    let macd_line: Vec<f64> = (macd_start..closes.len())
        .map(|i| fast[i].unwrap_or(0.0) - slow[i].unwrap_or(0.0))
        .collect();
    let signal_line = math::ema_series(&macd_line, signal_period);

    for (j, &macd) in macd_line.iter().enumerate() {
        let signal = signal_line[j];
        out[macd_start + j] = Some(MacdPoint {
            macd,
            signal,
            histogram: signal.map(|s| macd - s),
        });
    }
    out
}

/// MACD series with the default periods (12, 26, 9).
pub fn macd_series_default(prices: &[PricePoint]) -> Vec<Option<MacdPoint>> {
    macd_series(prices, 12, 26, 9)
}
