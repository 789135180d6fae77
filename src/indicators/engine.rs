//! Computes the full indicator set for one instrument's candle history.

use crate::config::IndicatorConfig;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::volatility::{bollinger_position, calculate_bollinger_bands};
use crate::indicators::volume::calculate_volume_ratio;
use crate::models::indicators::{Candle, IndicatorSet};

#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    config: IndicatorConfig,
}

impl IndicatorEngine {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Whether `candles` covers every lookback period without fallbacks.
    pub fn has_full_history(&self, candles: &[Candle]) -> bool {
        candles.len() >= self.config.min_history()
    }

    /// Indicators for the last candle in `candles`.
    ///
    /// Short history degrades to the documented fallbacks of each indicator.
    /// Returns `None` only for an empty series.
    pub fn compute(&self, candles: &[Candle]) -> Option<IndicatorSet> {
        let last = candles.last()?;
        let cfg = &self.config;

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
        let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();

        let rsi = calculate_rsi(&closes, cfg.rsi_period);
        let macd = calculate_macd(&closes, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal);
        let bands = calculate_bollinger_bands(&closes, cfg.bollinger_period, cfg.bollinger_std_dev)?;
        let bb_position = bollinger_position(last.close, &bands);
        let volume_ratio = calculate_volume_ratio(&volumes, cfg.volume_window);
        let levels = calculate_support_resistance(&lows, &highs, cfg.levels_window)?;

        Some(
            IndicatorSet::new(rsi, macd.macd, bb_position, volume_ratio)
                .with_macd(macd)
                .with_bollinger(bands)
                .with_levels(levels),
        )
    }
}
