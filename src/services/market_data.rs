//! Market data boundary.
//!
//! The exchange feed writes candles and tickers into a store; analysis passes
//! read owned copies so a pass never sees a half-updated history.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use tracing::debug;

use crate::config::DEFAULT_HISTORY_LIMIT;
use crate::error::{Result, ScanError};
use crate::models::indicators::Candle;
use crate::models::market::InstrumentSnapshot;

pub trait MarketDataProvider {
    /// Symbols the provider currently holds data for, sorted.
    fn symbols(&self) -> Result<Vec<String>>;

    /// Up to `limit` most recent candles, oldest first.
    fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>>;

    /// Latest ticker, if one has been received.
    fn get_ticker(&self, symbol: &str) -> Result<Option<InstrumentSnapshot>>;
}

#[derive(Debug, Default)]
struct SymbolData {
    candles: VecDeque<Candle>,
    ticker: Option<InstrumentSnapshot>,
}

/// In-memory store with a bounded rolling candle history per symbol.
#[derive(Debug)]
pub struct InMemoryMarketDataStore {
    capacity: usize,
    data: RwLock<HashMap<String, SymbolData>>,
}

impl Default for InMemoryMarketDataStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl InMemoryMarketDataStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a closed or in-progress candle.
    ///
    /// A candle with the same timestamp as the newest one replaces it; an
    /// older timestamp is rejected. The oldest candle is evicted once the
    /// history is full.
    pub fn push_candle(&self, symbol: &str, candle: Candle) -> Result<()> {
        candle.validate().map_err(|reason| ScanError::InvalidCandle {
            symbol: symbol.to_string(),
            reason,
        })?;

        let mut data = self.write()?;
        let entry = data.entry(symbol.to_string()).or_default();

        match entry.candles.back_mut() {
            Some(last) if candle.timestamp == last.timestamp => {
                *last = candle;
                return Ok(());
            }
            Some(last) if candle.timestamp < last.timestamp => {
                return Err(ScanError::OutOfOrderCandle {
                    symbol: symbol.to_string(),
                    timestamp: candle.timestamp,
                    last: last.timestamp,
                });
            }
            _ => {}
        }

        entry.candles.push_back(candle);
        while entry.candles.len() > self.capacity {
            entry.candles.pop_front();
        }
        Ok(())
    }

    /// Replace the stored history for `symbol`, e.g. after a REST backfill.
    ///
    /// Candles must be strictly increasing in time; only the newest
    /// `capacity` are kept.
    pub fn load_history(&self, symbol: &str, candles: Vec<Candle>) -> Result<()> {
        let mut previous: Option<i64> = None;
        for candle in &candles {
            candle.validate().map_err(|reason| ScanError::InvalidCandle {
                symbol: symbol.to_string(),
                reason,
            })?;
            if let Some(last) = previous {
                if candle.timestamp <= last {
                    return Err(ScanError::OutOfOrderCandle {
                        symbol: symbol.to_string(),
                        timestamp: candle.timestamp,
                        last,
                    });
                }
            }
            previous = Some(candle.timestamp);
        }

        let skip = candles.len().saturating_sub(self.capacity);
        let history: VecDeque<Candle> = candles.into_iter().skip(skip).collect();

        debug!(symbol = %symbol, count = history.len(), "MarketDataStore: loaded history");

        let mut data = self.write()?;
        data.entry(symbol.to_string()).or_default().candles = history;
        Ok(())
    }

    /// Overwrite the ticker for its symbol.
    pub fn update_ticker(&self, snapshot: InstrumentSnapshot) -> Result<()> {
        if !(snapshot.price.is_finite() && snapshot.price > 0.0) {
            return Err(ScanError::InvalidParameter(format!(
                "ticker price for {} must be positive, got {}",
                snapshot.symbol, snapshot.price
            )));
        }
        if !(snapshot.volume.is_finite() && snapshot.volume >= 0.0) {
            return Err(ScanError::InvalidParameter(format!(
                "ticker volume for {} must be non-negative, got {}",
                snapshot.symbol, snapshot.volume
            )));
        }
        let symbol = snapshot.symbol.clone();
        let mut data = self.write()?;
        data.entry(symbol).or_default().ticker = Some(snapshot);
        Ok(())
    }

    pub fn history_len(&self, symbol: &str) -> Result<usize> {
        let data = self.read()?;
        Ok(data.get(symbol).map(|d| d.candles.len()).unwrap_or(0))
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, SymbolData>>> {
        self.data
            .read()
            .map_err(|e| ScanError::StoreUnavailable(e.to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, SymbolData>>> {
        self.data
            .write()
            .map_err(|e| ScanError::StoreUnavailable(e.to_string()))
    }
}

impl MarketDataProvider for InMemoryMarketDataStore {
    fn symbols(&self) -> Result<Vec<String>> {
        let data = self.read()?;
        let mut symbols: Vec<String> = data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn get_candles(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>> {
        let data = self.read()?;
        let entry = data
            .get(symbol)
            .ok_or_else(|| ScanError::UnknownSymbol(symbol.to_string()))?;
        let skip = entry.candles.len().saturating_sub(limit);
        Ok(entry.candles.iter().skip(skip).copied().collect())
    }

    fn get_ticker(&self, symbol: &str) -> Result<Option<InstrumentSnapshot>> {
        let data = self.read()?;
        let entry = data
            .get(symbol)
            .ok_or_else(|| ScanError::UnknownSymbol(symbol.to_string()))?;
        Ok(entry.ticker.clone())
    }
}
