//! Interval-driven and triggered passes

use std::sync::Arc;
use std::time::Duration;

use oppscan::config::ScannerConfig;
use oppscan::core::{ScanRuntime, ScanScheduler};
use oppscan::metrics::ScanMetrics;
use oppscan::models::{Candle, InstrumentSnapshot};
use oppscan::services::{InMemoryMarketDataStore, MarketDataProvider};

const SYMBOLS: [&str; 2] = ["BTCUSDT", "ETHUSDT"];

fn seeded_store() -> Arc<InMemoryMarketDataStore> {
    let store = Arc::new(InMemoryMarketDataStore::default());
    for (n, symbol) in SYMBOLS.iter().enumerate() {
        let step = if n == 0 { 1.0 } else { -1.0 };
        let candles: Vec<Candle> = (0..50)
            .map(|i| {
                let close = 200.0 + step * i as f64;
                Candle::new(close - step, close + 1.5, close - 1.5, close, 100.0, i as i64 * 60_000)
            })
            .collect();
        let price = candles[49].close;
        store.load_history(symbol, candles).unwrap();
        store
            .update_ticker(InstrumentSnapshot::new(*symbol, "binance", price, 1_000.0))
            .unwrap();
    }
    store
}

fn config() -> ScannerConfig {
    ScannerConfig {
        symbols: SYMBOLS.iter().map(|s| s.to_string()).collect(),
        ..ScannerConfig::default()
    }
}

/// Provider that holds every candle read long enough for passes to overlap.
struct SlowProvider {
    inner: Arc<InMemoryMarketDataStore>,
    delay: Duration,
}

impl MarketDataProvider for SlowProvider {
    fn symbols(&self) -> oppscan::Result<Vec<String>> {
        self.inner.symbols()
    }

    fn get_candles(&self, symbol: &str, limit: usize) -> oppscan::Result<Vec<Candle>> {
        std::thread::sleep(self.delay);
        self.inner.get_candles(symbol, limit)
    }

    fn get_ticker(&self, symbol: &str) -> oppscan::Result<Option<InstrumentSnapshot>> {
        self.inner.get_ticker(symbol)
    }
}

#[tokio::test]
async fn test_trigger_publishes_latest_result() {
    let runtime = Arc::new(ScanRuntime::new(config(), seeded_store()));
    let scheduler = ScanScheduler::new(runtime);
    let rx = scheduler.subscribe();
    assert!(rx.borrow().is_none());

    let result = scheduler.trigger().await.expect("pass should complete");
    assert_eq!(result.analyzed, 2);
    assert_eq!(result.opportunities.len(), 2);

    let published = rx.borrow().clone().expect("result should be published");
    assert!(Arc::ptr_eq(&published, &result));
}

#[tokio::test]
async fn test_interval_passes_until_stopped() {
    let runtime = Arc::new(ScanRuntime::new(config(), seeded_store()));
    let scheduler = ScanScheduler::new(runtime).with_interval(Duration::from_millis(20));
    assert_eq!(scheduler.interval(), Duration::from_millis(20));
    let mut rx = scheduler.subscribe();

    scheduler.start().await;
    assert!(scheduler.is_running().await);

    tokio::time::timeout(Duration::from_secs(5), rx.changed())
        .await
        .expect("a pass should finish within the timeout")
        .unwrap();
    assert!(rx.borrow().is_some());

    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_overlapping_trigger_is_dropped() {
    let provider = Arc::new(SlowProvider {
        inner: seeded_store(),
        delay: Duration::from_millis(100),
    });
    let metrics = Arc::new(ScanMetrics::new().unwrap());
    let runtime = Arc::new(ScanRuntime::new(config(), provider).with_metrics(metrics.clone()));
    let scheduler = ScanScheduler::new(runtime);

    let (first, second) = tokio::join!(scheduler.trigger(), scheduler.trigger());
    let completed = [first.is_some(), second.is_some()];
    assert_eq!(completed.iter().filter(|done| **done).count(), 1);
    assert_eq!(metrics.passes_total.get(), 1);
    assert_eq!(metrics.passes_skipped_total.get(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_stop_abandons_pass_in_flight() {
    let provider = Arc::new(SlowProvider {
        inner: seeded_store(),
        delay: Duration::from_millis(100),
    });
    let runtime = Arc::new(ScanRuntime::new(config(), provider));
    let scheduler = ScanScheduler::new(runtime).with_interval(Duration::from_millis(10));
    let mut rx = scheduler.subscribe();

    scheduler.start().await;
    // first tick fires at once; its pass needs ~200ms
    tokio::time::sleep(Duration::from_millis(50)).await;
    scheduler.stop().await;
    rx.borrow_and_update();

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(!rx.has_changed().unwrap());
    assert!(rx.borrow().is_none());
}

#[test]
fn test_default_interval_follows_timeframe() {
    let runtime = Arc::new(ScanRuntime::new(config(), seeded_store()));
    assert_eq!(ScanScheduler::new(runtime).interval(), Duration::from_secs(300));
}
