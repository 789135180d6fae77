use serde::{Deserialize, Serialize};

/// One OHLCV bar. `timestamp` is the bar open time in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64, timestamp: i64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check `low <= min(open, close) <= max(open, close) <= high` and a
    /// non-negative volume. Returns the violated rule on failure.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [self.open, self.high, self.low, self.close, self.volume];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err("non-finite field".to_string());
        }
        if self.volume < 0.0 {
            return Err(format!("negative volume {}", self.volume));
        }
        let body_low = self.open.min(self.close);
        let body_high = self.open.max(self.close);
        if self.low > body_low {
            return Err(format!("low {} above body {}", self.low, body_low));
        }
        if self.high < body_high {
            return Err(format!("high {} below body {}", self.high, body_high));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
}

/// Indicator values for the latest bar of one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    pub rsi: f64,
    pub macd: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub macd_histogram: Option<f64>,
    pub bb_position: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bollinger: Option<BollingerBands>,
    pub volume_ratio: f64,
    pub support: f64,
    pub resistance: f64,
}

impl IndicatorSet {
    /// Bare set with only the fields the signal rules read.
    pub fn new(rsi: f64, macd: f64, bb_position: f64, volume_ratio: f64) -> Self {
        Self {
            rsi,
            macd,
            macd_signal: None,
            macd_histogram: None,
            bb_position,
            bollinger: None,
            volume_ratio,
            support: 0.0,
            resistance: 0.0,
        }
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.macd = macd.macd;
        self.macd_signal = macd.signal;
        self.macd_histogram = macd.histogram;
        self
    }

    pub fn with_bollinger(mut self, bands: BollingerBands) -> Self {
        self.bollinger = Some(bands);
        self
    }

    pub fn with_levels(mut self, levels: SupportResistance) -> Self {
        self.support = levels.support;
        self.resistance = levels.resistance;
        self
    }
}
