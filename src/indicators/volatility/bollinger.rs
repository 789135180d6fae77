//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerBands;

/// Band half-width used when history is shorter than the period.
pub const FALLBACK_BAND_PCT: f64 = 0.02;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
///
/// With fewer than `period` closes the bands are the last close ±2%.
/// `None` only for an empty series.
pub fn calculate_bollinger_bands(closes: &[f64], period: usize, std_dev: f64) -> Option<BollingerBands> {
    let last = *closes.last()?;

    let std = match math::standard_deviation(closes, period) {
        Some(std) => std,
        None => {
            return Some(BollingerBands {
                upper: last * (1.0 + FALLBACK_BAND_PCT),
                middle: last,
                lower: last * (1.0 - FALLBACK_BAND_PCT),
            })
        }
    };
    let middle = math::sma(closes, period)?;

    Some(BollingerBands {
        upper: middle + (std_dev * std),
        middle,
        lower: middle - (std_dev * std),
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> Option<BollingerBands> {
    calculate_bollinger_bands(closes, 20, 2.0)
}

/// Where `price` sits inside the bands: 0 at the lower band, 1 at the upper.
///
/// Not clamped; a price outside the bands lands below 0 or above 1. A flat
/// band (upper == lower) gives 0.5.
pub fn bollinger_position(price: f64, bands: &BollingerBands) -> f64 {
    let width = bands.upper - bands.lower;
    if width == 0.0 || !width.is_finite() {
        return 0.5;
    }
    (price - bands.lower) / width
}
