use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Discrete crossover event emitted at a single time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Signal {
    #[default]
    None,
    Buy,
    Sell,
}

impl Signal {
    pub fn is_event(&self) -> bool {
        !matches!(self, Signal::None)
    }
}

/// One derived row of the analysis overlay, aligned 1:1 with the input
/// series. The moving averages are absent for the first (window - 1) rows
/// of their respective window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_ma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_ma: Option<f64>,
    pub signal: Signal,
}
