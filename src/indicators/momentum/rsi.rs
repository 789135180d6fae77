//! RSI (Relative Strength Index) indicator

/// Value returned when there are not enough closes to seed the averages.
pub const RSI_NEUTRAL: f64 = 50.0;

/// Calculate RSI with Wilder's smoothing
///
/// The first `period` deltas seed average gain/loss with a simple mean; each
/// later delta updates them as `avg = (avg * (period - 1) + x) / period`.
/// RSI = 100 - 100 / (1 + avg_gain / avg_loss)
///
/// Fewer than `period + 1` closes gives [`RSI_NEUTRAL`]. A zero average loss
/// gives 100.
pub fn calculate_rsi(closes: &[f64], period: usize) -> f64 {
    if period == 0 || closes.len() < period + 1 {
        return RSI_NEUTRAL;
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let (seed, rest) = deltas.split_at(period);

    let mut avg_gain = seed.iter().map(|d| d.max(0.0)).sum::<f64>() / period as f64;
    let mut avg_loss = seed.iter().map(|d| (-d).max(0.0)).sum::<f64>() / period as f64;

    let smoothing = (period - 1) as f64;
    for delta in rest {
        avg_gain = (avg_gain * smoothing + delta.max(0.0)) / period as f64;
        avg_loss = (avg_loss * smoothing + (-delta).max(0.0)) / period as f64;
    }

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> f64 {
    calculate_rsi(closes, 14)
}
