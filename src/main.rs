//! Demo scan over synthetic market data.
//!
//! Seeds the in-memory store with generated candles and tickers, runs one
//! pass through the scheduler and prints the ranked opportunities with a
//! performance report.

use std::env;
use std::sync::Arc;

use chrono::Utc;
use oppscan::config::ScannerConfig;
use oppscan::core::{ScanRuntime, ScanScheduler};
use oppscan::logging;
use oppscan::metrics::ScanMetrics;
use oppscan::models::{Candle, InstrumentSnapshot};
use oppscan::ranking::{OpportunityFilter, PerformanceReport};
use oppscan::services::InMemoryMarketDataStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ScannerConfig::from_env()?;
    logging::init_logging_for(&config.environment);

    let filter: OpportunityFilter = env::var("SCAN_FILTER")
        .ok()
        .map(|f| f.parse::<OpportunityFilter>())
        .transpose()?
        .unwrap_or_default();

    info!(
        environment = %config.environment,
        mode = %config.analysis_mode,
        risk = %config.risk_level,
        timeframe = %config.timeframe,
        symbols = config.symbols.len(),
        "Starting opportunity scan"
    );

    let store = Arc::new(InMemoryMarketDataStore::new(config.history_limit));
    seed_store(&store, &config)?;

    let metrics = Arc::new(ScanMetrics::new()?);
    let runtime = Arc::new(ScanRuntime::new(config, store).with_metrics(metrics.clone()));
    let scheduler = ScanScheduler::new(runtime);

    let result = scheduler
        .trigger()
        .await
        .ok_or("scan pass did not complete")?;

    let visible: Vec<_> = filter.apply(&result.opportunities);
    println!("{}", serde_json::to_string_pretty(&visible)?);

    let report = PerformanceReport::generate(&result.opportunities, Utc::now());
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!(
        analyzed = result.analyzed,
        skipped = result.skipped,
        shown = visible.len(),
        "Scan finished"
    );
    print!("{}", metrics.render());

    Ok(())
}

/// Deterministic price paths: each symbol gets its own drift and cycle so the
/// basket covers oversold, overbought and flat instruments.
fn seed_store(store: &InMemoryMarketDataStore, config: &ScannerConfig) -> oppscan::Result<()> {
    let step_ms = config.timeframe.duration().as_millis() as i64;
    let now_ms = Utc::now().timestamp_millis();
    let count = config.history_limit;
    let start_ms = now_ms - step_ms * count as i64;

    for (n, symbol) in config.symbols.iter().enumerate() {
        let base = 10.0 + n as f64 * 37.5;
        let drift = ((n % 5) as f64 - 2.0) * 0.004;
        let mut candles = Vec::with_capacity(count);
        let mut close = base;

        for i in 0..count {
            let open = close;
            let wave = ((i + n) as f64 / 6.0).sin() * 0.006;
            close = (open * (1.0 + drift + wave)).max(0.0001);
            let high = open.max(close) * 1.002;
            let low = open.min(close) * 0.998;
            let spike = if i + 1 == count && n % 3 == 0 { 3.0 } else { 1.0 };
            let volume = (1_000.0 + (i % 7) as f64 * 50.0) * spike;
            candles.push(Candle::new(open, high, low, close, volume, start_ms + step_ms * i as i64));
        }

        let first = candles.first().map(|c| c.open).unwrap_or(base);
        let volume: f64 = candles.iter().map(|c| c.volume).sum();
        let lows = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let highs = candles.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);

        store.load_history(symbol, candles)?;
        store.update_ticker(
            InstrumentSnapshot::new(symbol.clone(), "binance", close, volume)
                .with_change((close - first) / first * 100.0)
                .with_range(lows, highs)
                .with_timestamp(now_ms),
        )?;
    }
    Ok(())
}
