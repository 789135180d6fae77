//! Support and Resistance levels

use crate::common::math;
use crate::models::indicators::SupportResistance;

/// Lowest low and highest high over the trailing `window` bars.
///
/// Uses every bar when there are fewer than `window`, and at least the last
/// bar when `window` is 0. `None` when either series is empty.
pub fn calculate_support_resistance(lows: &[f64], highs: &[f64], window: usize) -> Option<SupportResistance> {
    let lows = math::trailing(lows, window);
    let highs = math::trailing(highs, window);
    if lows.is_empty() || highs.is_empty() {
        return None;
    }

    let support = lows.iter().copied().fold(f64::INFINITY, f64::min);
    let resistance = highs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(SupportResistance { support, resistance })
}

/// Calculate support/resistance with default window (20)
pub fn calculate_support_resistance_default(lows: &[f64], highs: &[f64]) -> Option<SupportResistance> {
    calculate_support_resistance(lows, highs, 20)
}
