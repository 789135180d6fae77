use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorSet;

/// Latest 24h ticker for one instrument. Overwritten on every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSnapshot {
    pub symbol: String,
    pub exchange: String,
    pub price: f64,
    pub change_24h: f64,
    pub volume: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub timestamp: i64,
}

impl InstrumentSnapshot {
    pub fn new(symbol: impl Into<String>, exchange: impl Into<String>, price: f64, volume: f64) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            price,
            change_24h: 0.0,
            volume,
            high_24h: price,
            low_24h: price,
            timestamp: 0,
        }
    }

    pub fn with_change(mut self, change_24h: f64) -> Self {
        self.change_24h = change_24h;
        self
    }

    pub fn with_range(mut self, low_24h: f64, high_24h: f64) -> Self {
        self.low_24h = low_24h;
        self.high_24h = high_24h;
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Ticker plus the indicators derived from its candle history.
///
/// `indicators` is `None` when the history was too short to analyse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentState {
    pub snapshot: InstrumentSnapshot,
    pub indicators: Option<IndicatorSet>,
}

impl InstrumentState {
    pub fn new(snapshot: InstrumentSnapshot, indicators: Option<IndicatorSet>) -> Self {
        Self {
            snapshot,
            indicators,
        }
    }
}
