//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod price;
pub mod signal;

pub use indicators::{BollingerPoint, IndicatorOverlay, MacdPoint};
pub use price::PricePoint;
pub use signal::{IndicatorRow, Signal};
