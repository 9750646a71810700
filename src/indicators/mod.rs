//! Optional overlay indicators, grouped by category.

pub mod momentum;
pub mod volatility;
