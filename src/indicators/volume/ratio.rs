//! Volume ratio: latest volume against its moving average

use crate::common::math;

/// `last_volume / SMA(volumes, window)`.
///
/// Returns 1.0 (neutral) when there are fewer than `window` volumes or the
/// average is zero.
pub fn calculate_volume_ratio(volumes: &[f64], window: usize) -> f64 {
    if window == 0 || volumes.len() < window {
        return 1.0;
    }
    let last = match volumes.last() {
        Some(&v) => v,
        None => return 1.0,
    };
    match math::sma(volumes, window) {
        Some(avg) if avg > 0.0 => last / avg,
        _ => 1.0,
    }
}
