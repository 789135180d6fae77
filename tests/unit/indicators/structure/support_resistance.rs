//! Unit tests for support and resistance levels

use oppscan::indicators::structure::{
    calculate_support_resistance, calculate_support_resistance_default,
};

#[test]
fn test_levels_over_trailing_window() {
    let lows = [1.0, 5.0, 3.0, 4.0];
    let highs = [20.0, 6.0, 8.0, 7.0];
    let levels = calculate_support_resistance(&lows, &highs, 2).unwrap();
    assert_eq!(levels.support, 3.0);
    assert_eq!(levels.resistance, 8.0);
}

#[test]
fn test_levels_short_history_uses_everything() {
    let levels = calculate_support_resistance_default(&[9.0, 7.0], &[11.0, 12.0]).unwrap();
    assert_eq!(levels.support, 7.0);
    assert_eq!(levels.resistance, 12.0);
}

#[test]
fn test_levels_empty() {
    assert!(calculate_support_resistance_default(&[], &[]).is_none());
}
