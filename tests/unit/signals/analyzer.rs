//! Unit tests for the signal analyzer

use oppscan::models::{AnalysisMode, IndicatorSet, RiskLevel, SignalDirection};
use oppscan::signals::SignalAnalyzer;

fn analyze(rsi: f64, macd: f64, bb_position: f64, volume_ratio: f64) -> oppscan::models::Signal {
    let indicators = IndicatorSet::new(rsi, macd, bb_position, volume_ratio);
    SignalAnalyzer::analyze(&indicators, 0.0, AnalysisMode::Swing, RiskLevel::Medium)
}

#[test]
fn test_all_bullish_rules_clamp_at_95() {
    let signal = analyze(25.0, 0.5, 0.1, 2.5);
    assert_eq!(signal.direction, SignalDirection::Buy);
    assert_eq!(signal.probability, 95);
    assert_eq!(signal.reasons.len(), 4);
    // 4 reasons + volume above 2x
    assert_eq!(signal.strength, 55);
}

#[test]
fn test_bearish_confluence() {
    let signal = analyze(80.0, -0.3, 0.9, 1.0);
    assert_eq!(signal.direction, SignalDirection::Sell);
    assert_eq!(signal.probability, 85);
    assert_eq!(signal.reasons.len(), 3);
    // 3 reasons + RSI beyond 75
    assert_eq!(signal.strength, 45);
}

#[test]
fn test_no_rules_is_hold() {
    let signal = analyze(50.0, 0.0, 0.5, 1.0);
    assert_eq!(signal.direction, SignalDirection::Hold);
    assert_eq!(signal.probability, 50);
    assert!(signal.reasons.is_empty());
    assert_eq!(signal.strength, 0);
}

#[test]
fn test_confirming_rules_cannot_set_direction() {
    let signal = analyze(50.0, 0.4, 0.1, 1.0);
    assert_eq!(signal.direction, SignalDirection::Hold);
    assert_eq!(signal.probability, 50);
    assert_eq!(signal.reasons.len(), 2);
}

#[test]
fn test_disagreeing_rules_add_reasons_only() {
    let signal = analyze(25.0, -0.3, 0.9, 1.0);
    assert_eq!(signal.direction, SignalDirection::Buy);
    assert_eq!(signal.probability, 65);
    assert_eq!(signal.reasons.len(), 3);
    assert!(signal.reasons[0].starts_with("RSI oversold"));
    assert!(signal.reasons[1].starts_with("MACD bearish"));
    assert!(signal.reasons[2].starts_with("Price near upper Bollinger band"));
}

#[test]
fn test_volume_scores_without_direction() {
    let signal = analyze(50.0, 0.0, 0.5, 3.5);
    assert_eq!(signal.direction, SignalDirection::Hold);
    assert_eq!(signal.probability, 60);
    assert_eq!(signal.strength, 10 + 15 + 10);
}

#[test]
fn test_probability_always_bounded() {
    let rsis = [0.0, 10.0, 25.0, 29.9, 30.0, 50.0, 70.0, 70.1, 80.0, 100.0];
    let macds = [-5.0, -0.1, 0.0, 0.1, 5.0];
    let positions = [-0.5, 0.0, 0.19, 0.5, 0.81, 1.0, 1.5];
    let ratios = [0.0, 1.0, 2.0, 2.01, 3.5, 10.0];
    for &rsi in &rsis {
        for &macd in &macds {
            for &bb in &positions {
                for &vr in &ratios {
                    let signal = analyze(rsi, macd, bb, vr);
                    assert!(signal.probability <= 95);
                    assert!(signal.probability >= 50);
                    assert!(signal.strength <= 100);
                }
            }
        }
    }
}
