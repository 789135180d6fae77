//! Shared numeric helpers for the indicator functions.
//!
//! All helpers are pure and never panic on short input.

/// Relative tolerance, in ulps of the input scale, below which a result is
/// rounding noise rather than signal.
const NOISE_ULPS: f64 = 16.0;

/// `value` with rounding noise relative to `scale` snapped to exactly 0.
pub fn snap_to_zero(value: f64, scale: f64) -> f64 {
    if value.abs() <= f64::EPSILON * NOISE_ULPS * scale.abs() {
        0.0
    } else {
        value
    }
}

/// Mean of the last `period` values.
///
/// With fewer than `period` values the last available value is returned
/// instead. `None` only for an empty slice or a zero period.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 {
        return None;
    }
    let last = *values.last()?;
    if values.len() < period {
        return Some(last);
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Smoothing factor `2 / (period + 1)`.
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step from the previous value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = ema_multiplier(period);
    value * k + previous * (1.0 - k)
}

/// Full EMA series seeded with the SMA of the first `period` values.
///
/// Element `i` of the result lines up with `values[period - 1 + i]`.
/// Empty when there are fewer than `period` values.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);
    let mut current = seed;
    for &value in &values[period..] {
        current = ema_from_previous(value, current, period);
        series.push(current);
    }
    series
}

/// Latest EMA value; falls back to [`sma`] when the series is too short to seed.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    match ema_series(values, period).last() {
        Some(&value) => Some(value),
        None => sma(values, period),
    }
}

/// Population standard deviation of the last `period` values.
///
/// A window of identical values gives exactly 0 even when its mean does not
/// round-trip.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(snap_to_zero(variance.sqrt(), mean))
}

/// Trailing slice of at most `window` elements, and at least one when
/// `values` is non-empty.
pub fn trailing(values: &[f64], window: usize) -> &[f64] {
    let start = values.len().saturating_sub(window.max(1));
    &values[start..]
}
