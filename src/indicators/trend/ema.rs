//! SMA and EMA over a value series

use crate::common::math;

/// Simple moving average of the last `period` values.
///
/// With fewer than `period` values this is the last available value.
/// `None` for an empty series.
pub fn calculate_sma(values: &[f64], period: usize) -> Option<f64> {
    math::sma(values, period)
}

/// Exponential moving average, `k = 2 / (period + 1)`, seeded with the SMA
/// of the first `period` values.
///
/// Too short to seed falls back to [`calculate_sma`].
pub fn calculate_ema(values: &[f64], period: usize) -> Option<f64> {
    math::ema(values, period)
}

