//! A single analysis pass over the market data store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ScannerConfig;
use crate::error::{Result, ScanError};
use crate::indicators::IndicatorEngine;
use crate::metrics::ScanMetrics;
use crate::models::indicators::Candle;
use crate::models::market::{InstrumentSnapshot, InstrumentState};
use crate::models::opportunity::Opportunity;
use crate::ranking::OpportunityRanker;
use crate::services::market_data::MarketDataProvider;

/// Output of one pass. Replaces the previous pass wholesale.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub opportunities: Vec<Opportunity>,
    pub analyzed: usize,
    pub skipped: usize,
    pub completed_at: DateTime<Utc>,
}

pub struct ScanRuntime {
    config: ScannerConfig,
    engine: IndicatorEngine,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    metrics: Option<Arc<ScanMetrics>>,
}

impl ScanRuntime {
    pub fn new(config: ScannerConfig, provider: Arc<dyn MarketDataProvider + Send + Sync>) -> Self {
        let engine = IndicatorEngine::new(config.indicators.clone());
        Self {
            config,
            engine,
            provider,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<ScanMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    pub fn metrics(&self) -> Option<&Arc<ScanMetrics>> {
        self.metrics.as_ref()
    }

    /// Read every configured symbol, compute indicators and rank.
    ///
    /// Symbols without a ticker or with less history than the longest
    /// lookback are skipped and counted, not analysed with fallbacks.
    pub fn run_pass(&self) -> Result<ScanResult> {
        let started = Instant::now();
        let min_history = self.config.indicators.min_history();

        let mut instruments: HashMap<String, InstrumentState> = HashMap::new();
        let mut skipped = 0usize;

        for symbol in &self.config.symbols {
            let (candles, ticker) = match self.read_symbol(symbol) {
                Ok(data) => data,
                Err(ScanError::UnknownSymbol(_)) => {
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let snapshot = match ticker {
                Some(snapshot) => snapshot,
                None => {
                    skipped += 1;
                    continue;
                }
            };

            if candles.len() < min_history {
                debug!(
                    symbol = %symbol,
                    candles = candles.len(),
                    min = min_history,
                    "ScanRuntime: not enough history for {}",
                    symbol
                );
                skipped += 1;
                continue;
            }

            let indicators = self.engine.compute(&candles);
            instruments.insert(symbol.clone(), InstrumentState::new(snapshot, indicators));
        }

        let opportunities = OpportunityRanker::rank(
            &instruments,
            self.config.min_volume,
            self.config.analysis_mode,
            self.config.risk_level,
        )?;

        let elapsed = started.elapsed();
        if let Some(metrics) = &self.metrics {
            metrics.passes_total.inc();
            metrics.instruments_skipped_total.inc_by(skipped as u64);
            metrics.opportunities.set(opportunities.len() as i64);
            metrics.pass_duration_seconds.observe(elapsed.as_secs_f64());
        }

        info!(
            analyzed = instruments.len(),
            skipped,
            opportunities = opportunities.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "ScanRuntime: pass complete ({} skipped)",
            skipped
        );

        Ok(ScanResult {
            opportunities,
            analyzed: instruments.len(),
            skipped,
            completed_at: Utc::now(),
        })
    }

    fn read_symbol(&self, symbol: &str) -> Result<(Vec<Candle>, Option<InstrumentSnapshot>)> {
        let candles = self.provider.get_candles(symbol, self.config.history_limit)?;
        let ticker = self.provider.get_ticker(symbol)?;
        Ok((candles, ticker))
    }
}
