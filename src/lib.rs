//! Opportunity scanner for a basket of crypto trading pairs.
//!
//! Candles and tickers come in from a market data provider, indicators are
//! derived per instrument, each instrument is scored into a buy/sell/hold call
//! with a trade plan, and the survivors are ranked into a bounded list.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod planner;
pub mod ranking;
pub mod services;
pub mod signals;

use std::collections::HashMap;

pub use config::{IndicatorConfig, ScannerConfig};
pub use error::{Result, ScanError};
pub use models::{
    AnalysisMode, Candle, IndicatorSet, InstrumentSnapshot, InstrumentState, Opportunity,
    RiskLevel, Signal, SignalDirection, Timeframe, TradePlan,
};

/// Compute the indicator set for an ordered candle series.
pub fn compute_indicators(candles: &[Candle], config: &IndicatorConfig) -> Option<IndicatorSet> {
    indicators::engine::IndicatorEngine::new(config.clone()).compute(candles)
}

/// Turn an indicator set into a directional call.
pub fn analyze_signal(
    indicators: &IndicatorSet,
    change_24h: f64,
    mode: AnalysisMode,
    risk: RiskLevel,
) -> Signal {
    signals::analyzer::SignalAnalyzer::analyze(indicators, change_24h, mode, risk)
}

/// Build targets, stop-loss and expected return for a call at `price`.
pub fn plan_trade(
    price: f64,
    direction: SignalDirection,
    mode: AnalysisMode,
    risk: RiskLevel,
) -> Result<TradePlan> {
    planner::TradePlanner::plan(price, direction, mode, risk)
}

/// Score, filter and rank every instrument in `instruments`.
pub fn rank_opportunities(
    instruments: &HashMap<String, InstrumentState>,
    min_volume: f64,
    mode: AnalysisMode,
    risk: RiskLevel,
) -> Result<Vec<Opportunity>> {
    ranking::OpportunityRanker::rank(instruments, min_volume, mode, risk)
}
