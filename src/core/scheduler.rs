//! Interval scheduler driving analysis passes.
//!
//! At most one pass runs at a time. A tick or trigger that arrives while a
//! pass is still running is dropped, and every finished pass replaces the
//! previous result on a watch channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::core::runtime::{ScanResult, ScanRuntime};

pub type LatestScan = Option<Arc<ScanResult>>;

pub struct ScanScheduler {
    runtime: Arc<ScanRuntime>,
    interval: Duration,
    in_flight: Arc<Mutex<()>>,
    sender: Arc<watch::Sender<LatestScan>>,
    handle: Arc<RwLock<Option<JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Scheduler ticking at the configured timeframe's scan interval.
    pub fn new(runtime: Arc<ScanRuntime>) -> Self {
        let interval = runtime.config().timeframe.scan_interval();
        let (sender, _) = watch::channel(None);
        Self {
            runtime,
            interval,
            in_flight: Arc::new(Mutex::new(())),
            sender: Arc::new(sender),
            handle: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Receiver that always holds the latest finished pass.
    pub fn subscribe(&self) -> watch::Receiver<LatestScan> {
        self.sender.subscribe()
    }

    /// Run a pass now, e.g. on a data push. `None` if a pass was already in
    /// flight or the pass failed.
    pub async fn trigger(&self) -> LatestScan {
        run_guarded(
            self.runtime.clone(),
            self.in_flight.clone(),
            self.sender.clone(),
        )
        .await
    }

    pub async fn start(&self) {
        let mut slot = self.handle.write().await;
        if slot.is_some() {
            debug!("ScanScheduler: already running");
            return;
        }

        let runtime = self.runtime.clone();
        let in_flight = self.in_flight.clone();
        let sender = self.sender.clone();
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            // Passes run inline so aborting the loop also drops an unfinished
            // pass before it can publish.
            loop {
                ticker.tick().await;
                run_guarded(runtime.clone(), in_flight.clone(), sender.clone()).await;
            }
        });

        *slot = Some(handle);
        info!(
            interval_secs = interval.as_secs_f64(),
            symbols = self.runtime.config().symbols.len(),
            "ScanScheduler: started"
        );
    }

    /// Stop ticking. A pass still in flight is abandoned and never published.
    pub async fn stop(&self) {
        let mut slot = self.handle.write().await;
        if let Some(handle) = slot.take() {
            handle.abort();
            info!("ScanScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}

async fn run_guarded(
    runtime: Arc<ScanRuntime>,
    in_flight: Arc<Mutex<()>>,
    sender: Arc<watch::Sender<LatestScan>>,
) -> LatestScan {
    let guard = match in_flight.try_lock_owned() {
        Ok(guard) => guard,
        Err(_) => {
            if let Some(metrics) = runtime.metrics() {
                metrics.passes_skipped_total.inc();
            }
            debug!("ScanScheduler: pass still in flight, skipping");
            return None;
        }
    };

    // Guard moves onto the blocking thread: an abandoned pass keeps the slot
    // until it finishes.
    let pass_runtime = runtime.clone();
    let pass = tokio::task::spawn_blocking(move || {
        let _guard = guard;
        pass_runtime.run_pass()
    });
    match pass.await {
        Ok(Ok(result)) => {
            let result = Arc::new(result);
            sender.send_replace(Some(result.clone()));
            Some(result)
        }
        Ok(Err(e)) => {
            error!(error = %e, "ScanScheduler: pass failed");
            None
        }
        Err(e) => {
            error!(error = %e, "ScanScheduler: pass task panicked");
            None
        }
    }
}
