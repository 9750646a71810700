use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub macd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Optional indicator series for the chart overlay. Each series is aligned
/// 1:1 with the input rows; entries are `None` until the indicator's
/// warm-up window is filled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<Vec<Option<MacdPoint>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<Vec<Option<BollingerPoint>>>,
}

impl IndicatorOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rsi(mut self, rsi: Vec<Option<f64>>) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_macd(mut self, macd: Vec<Option<MacdPoint>>) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_bollinger(mut self, bollinger: Vec<Option<BollingerPoint>>) -> Self {
        self.bollinger = Some(bollinger);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rsi.is_none() && self.macd.is_none() && self.bollinger.is_none()
    }
}
