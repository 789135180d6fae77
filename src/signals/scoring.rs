//! Probability bounds and the strength score

pub const BASE_PROBABILITY: u32 = 50;
pub const MAX_PROBABILITY: u32 = 95;

/// Cap an accumulated probability at [`MAX_PROBABILITY`].
pub fn clamp_probability(probability: u32) -> u32 {
    probability.min(MAX_PROBABILITY)
}

/// Strength 0..=100 from the number of reasons and how extreme volume and
/// RSI are.
pub fn calculate_strength(reason_count: usize, volume_ratio: f64, rsi: f64) -> u32 {
    let mut strength = 10 * reason_count as u32;
    if volume_ratio > 2.0 {
        strength += 15;
    }
    if volume_ratio > 3.0 {
        strength += 10;
    }
    if rsi < 25.0 || rsi > 75.0 {
        strength += 15;
    }
    strength.min(100)
}
