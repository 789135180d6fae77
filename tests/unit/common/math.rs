//! Unit tests for shared math helpers

use oppscan::common::math::{ema, ema_series, sma, snap_to_zero, standard_deviation};

#[test]
fn test_sma_uses_trailing_window() {
    assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0], 2), Some(3.5));
}

#[test]
fn test_sma_short_series_returns_last_value() {
    assert_eq!(sma(&[4.0, 9.0], 5), Some(9.0));
}

#[test]
fn test_sma_empty_or_zero_period() {
    assert_eq!(sma(&[], 3), None);
    assert_eq!(sma(&[1.0], 0), None);
}

#[test]
fn test_ema_series_seeded_with_sma() {
    let series = ema_series(&[1.0, 2.0, 3.0, 4.0], 3);
    assert_eq!(series, vec![2.0, 3.0]);
}

#[test]
fn test_ema_falls_back_to_sma_when_short() {
    assert_eq!(ema(&[5.0, 7.0], 3), Some(7.0));
    assert!(ema_series(&[5.0, 7.0], 3).is_empty());
}

#[test]
fn test_population_standard_deviation() {
    let std = standard_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0], 5).unwrap();
    assert!((std - 2.0_f64.sqrt()).abs() < 1e-12);
    assert!(standard_deviation(&[1.0, 2.0], 5).is_none());
}

#[test]
fn test_flat_window_has_zero_deviation() {
    for value in [0.1, 0.3, 0.7, 1.1, 43_250.17] {
        assert_eq!(standard_deviation(&[value; 20], 20), Some(0.0), "value {}", value);
    }
}

#[test]
fn test_snap_to_zero_is_relative_to_scale() {
    assert_eq!(snap_to_zero(5.55e-17, 0.1), 0.0);
    assert_eq!(snap_to_zero(-5.55e-17, 0.1), 0.0);
    assert_eq!(snap_to_zero(1e-6, 0.1), 1e-6);
    assert_eq!(snap_to_zero(1e-12, 0.0), 1e-12);
}
