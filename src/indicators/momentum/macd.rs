//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdIndicator;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of the MACD series
/// Histogram = MACD - Signal
///
/// With fewer than `slow` closes the MACD line is 0. Signal and histogram stay
/// `None` until the MACD series holds at least `signal_period` points.
/// Rounding noise relative to the last close is reported as exactly 0.
pub fn calculate_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdIndicator {
    let fast = math::ema_series(closes, fast_period);
    let slow = math::ema_series(closes, slow_period);

    if slow.is_empty() || fast.len() < slow.len() {
        return MacdIndicator {
            macd: 0.0,
            signal: None,
            histogram: None,
        };
    }

    // fast[i] aligns with closes[fast_period - 1 + i]; shift it onto slow's index.
    let offset = fast.len() - slow.len();
    let macd_series: Vec<f64> = slow
        .iter()
        .enumerate()
        .map(|(i, slow_ema)| fast[i + offset] - slow_ema)
        .collect();

    let scale = closes.last().copied().unwrap_or(0.0);
    let macd_line = math::snap_to_zero(*macd_series.last().unwrap_or(&0.0), scale);

    let signal_line = math::ema_series(&macd_series, signal_period)
        .last()
        .map(|signal| math::snap_to_zero(*signal, scale));
    let histogram = signal_line.map(|signal| math::snap_to_zero(macd_line - signal, scale));

    MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram,
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> MacdIndicator {
    calculate_macd(closes, 12, 26, 9)
}
