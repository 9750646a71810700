//! Momentum indicators

pub mod macd;
pub mod rsi;

pub use macd::{macd_series, macd_series_default};
pub use rsi::{rsi_series, rsi_series_default};
