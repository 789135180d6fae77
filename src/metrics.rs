//! Prometheus metrics for scan passes.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

use crate::error::Result;

pub struct ScanMetrics {
    registry: Registry,
    pub passes_total: IntCounter,
    pub passes_skipped_total: IntCounter,
    pub instruments_skipped_total: IntCounter,
    pub opportunities: IntGauge,
    pub pass_duration_seconds: Histogram,
}

impl ScanMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new_custom(Some("oppscan".to_string()), None)?;

        let passes_total = IntCounter::new("scan_passes_total", "Completed analysis passes")?;
        let passes_skipped_total = IntCounter::new(
            "scan_passes_skipped_total",
            "Ticks dropped because a pass was still running",
        )?;
        let instruments_skipped_total = IntCounter::new(
            "instruments_skipped_total",
            "Instruments left out of a pass for short history or missing ticker",
        )?;
        let opportunities = IntGauge::new(
            "opportunities",
            "Opportunities produced by the most recent pass",
        )?;
        let pass_duration_seconds = Histogram::with_opts(
            HistogramOpts::new("scan_pass_duration_seconds", "Wall time of one analysis pass")
                .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
        )?;

        registry.register(Box::new(passes_total.clone()))?;
        registry.register(Box::new(passes_skipped_total.clone()))?;
        registry.register(Box::new(instruments_skipped_total.clone()))?;
        registry.register(Box::new(opportunities.clone()))?;
        registry.register(Box::new(pass_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            passes_total,
            passes_skipped_total,
            instruments_skipped_total,
            opportunities,
            pass_duration_seconds,
        })
    }

    /// Text exposition of every registered metric.
    pub fn render(&self) -> String {
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buffer) {
            tracing::warn!(error = %e, "ScanMetrics: failed to encode metrics");
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
