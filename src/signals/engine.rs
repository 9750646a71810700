//! Crossover signal engine: windowed means, boolean cross state, discrete
//! Buy/Sell events at state transitions.

use crate::common::math;
use crate::models::{IndicatorRow, PricePoint, Signal};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("invalid windows: short window ({short}) must be positive and less than long window ({long})")]
    InvalidWindow { short: usize, long: usize },
    #[error("insufficient data: {len} rows, need at least {required} for the long window")]
    InsufficientData { len: usize, required: usize },
}

pub struct SignalEngine;

impl SignalEngine {
    /// Derive the full indicator overlay for a price series.
    ///
    /// Output is aligned 1:1 with the input. A Buy fires where the short MA
    /// first rises above the long MA, a Sell where it drops back to or
    /// below it. A tie counts as short-not-above-long.
    pub fn analyze(
        prices: &[PricePoint],
        short_window: usize,
        long_window: usize,
    ) -> Result<Vec<IndicatorRow>, SignalError> {
        if short_window == 0 || short_window >= long_window {
            return Err(SignalError::InvalidWindow {
                short: short_window,
                long: long_window,
            });
        }
        if prices.len() < long_window {
            return Err(SignalError::InsufficientData {
                len: prices.len(),
                required: long_window,
            });
        }

        let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();
        let short_ma = math::rolling_mean(&closes, short_window);
        let long_ma = math::rolling_mean(&closes, long_window);

        let mut rows = Vec::with_capacity(prices.len());
        // Cross state before warm-up counts as "short not above long", so a
        // series that opens with the short MA already on top fires one Buy
        // at the first index where both means are defined.
        let mut prev_state = false;

        for (i, point) in prices.iter().enumerate() {
            let state = match (short_ma[i], long_ma[i]) {
                (Some(s), Some(l)) => Some(s > l),
                _ => None,
            };

            let signal = match (prev_state, state) {
                (false, Some(true)) => Signal::Buy,
                (true, Some(false)) => Signal::Sell,
                _ => Signal::None,
            };

            if let Some(state) = state {
                prev_state = state;
            }

            rows.push(IndicatorRow {
                date: point.date,
                close: point.close,
                short_ma: short_ma[i],
                long_ma: long_ma[i],
                signal,
            });
        }

        Ok(rows)
    }
}

/// Rows where a crossover event fired, in time order.
pub fn signal_table(rows: &[IndicatorRow]) -> Vec<IndicatorRow> {
    rows.iter().filter(|r| r.signal.is_event()).cloned().collect()
}

/// Running directional exposure derived from the event sequence: +1 after a
/// Buy, back to 0 after a Sell. Kept separate from event emission so "a
/// signal fired" and "current exposure" stay distinct concepts.
pub fn net_position(rows: &[IndicatorRow]) -> Vec<i32> {
    let mut position = 0;
    rows.iter()
        .map(|r| {
            match r.signal {
                Signal::Buy => position += 1,
                Signal::Sell => position -= 1,
                Signal::None => {}
            }
            position
        })
        .collect()
}
