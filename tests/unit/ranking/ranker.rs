//! Unit tests for opportunity ranking

use std::collections::HashMap;

use oppscan::error::ScanError;
use oppscan::models::{
    AnalysisMode, IndicatorSet, InstrumentSnapshot, InstrumentState, RiskLevel, SignalDirection,
};
use oppscan::ranking::{OpportunityRanker, MAX_OPPORTUNITIES};

fn state(symbol: &str, price: f64, volume: f64, indicators: Option<IndicatorSet>) -> InstrumentState {
    InstrumentState::new(
        InstrumentSnapshot::new(symbol, "binance", price, volume).with_timestamp(1_700_000_000_000),
        indicators,
    )
}

fn strong_buy() -> IndicatorSet {
    IndicatorSet::new(25.0, 0.5, 0.1, 2.5)
}

fn rsi_only_buy() -> IndicatorSet {
    IndicatorSet::new(25.0, 0.0, 0.5, 1.0)
}

fn neutral() -> IndicatorSet {
    IndicatorSet::new(50.0, 0.0, 0.5, 1.0)
}

fn book(entries: Vec<InstrumentState>) -> HashMap<String, InstrumentState> {
    entries
        .into_iter()
        .map(|s| (s.snapshot.symbol.clone(), s))
        .collect()
}

#[test]
fn test_rank_filters_volume_missing_indicators_and_low_probability() {
    let instruments = book(vec![
        state("BTCUSDT", 100.0, 5_000.0, Some(strong_buy())),
        state("ETHUSDT", 100.0, 50.0, Some(strong_buy())),
        state("BNBUSDT", 100.0, 5_000.0, None),
        state("ADAUSDT", 100.0, 5_000.0, Some(neutral())),
    ]);

    let ranked = OpportunityRanker::rank(&instruments, 1_000.0, AnalysisMode::Swing, RiskLevel::Medium).unwrap();
    let symbols: Vec<&str> = ranked.iter().map(|o| o.symbol()).collect();
    assert_eq!(symbols, vec!["BTCUSDT"]);
    assert!(ranked.iter().all(|o| o.snapshot.volume >= 1_000.0));
}

#[test]
fn test_rank_orders_by_probability_times_return() {
    let instruments = book(vec![
        state("AAA", 100.0, 1.0, Some(rsi_only_buy())),
        state("BBB", 100.0, 1.0, Some(strong_buy())),
    ]);
    let ranked = OpportunityRanker::rank(&instruments, 0.0, AnalysisMode::Swing, RiskLevel::Medium).unwrap();
    assert_eq!(ranked[0].symbol(), "BBB");
    assert_eq!(ranked[0].probability(), 95);
    assert_eq!(ranked[1].symbol(), "AAA");
    assert_eq!(ranked[1].probability(), 65);
    assert_eq!(ranked[0].direction(), SignalDirection::Buy);
}

#[test]
fn test_rank_negative_return_inverts_probability_order() {
    // scalping/high expects -1.7%, so the stronger call gets the lower key
    let instruments = book(vec![
        state("AAA", 100.0, 1.0, Some(rsi_only_buy())),
        state("BBB", 100.0, 1.0, Some(strong_buy())),
    ]);
    let ranked = OpportunityRanker::rank(&instruments, 0.0, AnalysisMode::Scalping, RiskLevel::High).unwrap();
    assert!(ranked.iter().all(|o| o.expected_return() < 0.0));
    assert_eq!(ranked[0].symbol(), "AAA");
    assert_eq!(ranked[1].symbol(), "BBB");
}

#[test]
fn test_rank_truncates_to_thirty() {
    let instruments = book(
        (0..45)
            .map(|i| state(&format!("SYM{:02}", i), 10.0 + i as f64, 1_000.0, Some(strong_buy())))
            .collect(),
    );
    let ranked = OpportunityRanker::rank(&instruments, 0.0, AnalysisMode::Swing, RiskLevel::Low).unwrap();
    assert_eq!(ranked.len(), MAX_OPPORTUNITIES);
}

#[test]
fn test_rank_ties_break_by_symbol() {
    let instruments = book(vec![
        state("DOGEUSDT", 1.0, 1.0, Some(strong_buy())),
        state("ADAUSDT", 1.0, 1.0, Some(strong_buy())),
        state("LINKUSDT", 1.0, 1.0, Some(strong_buy())),
    ]);
    let ranked = OpportunityRanker::rank(&instruments, 0.0, AnalysisMode::Swing, RiskLevel::Medium).unwrap();
    let symbols: Vec<&str> = ranked.iter().map(|o| o.symbol()).collect();
    assert_eq!(symbols, vec!["ADAUSDT", "DOGEUSDT", "LINKUSDT"]);
}

#[test]
fn test_rank_is_idempotent() {
    let instruments = book(
        (0..20)
            .map(|i| {
                let indicators = if i % 2 == 0 { strong_buy() } else { IndicatorSet::new(80.0, -0.3, 0.9, 1.0) };
                state(&format!("PAIR{}", i), 5.0 * (i + 1) as f64, 100.0, Some(indicators))
            })
            .collect(),
    );
    let first = OpportunityRanker::rank(&instruments, 0.0, AnalysisMode::Position, RiskLevel::Medium).unwrap();
    let second = OpportunityRanker::rank(&instruments, 0.0, AnalysisMode::Position, RiskLevel::Medium).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_rank_stamps_snapshot_time_and_skips_bad_price() {
    let instruments = book(vec![
        state("GOOD", 100.0, 1.0, Some(strong_buy())),
        state("BAD", 0.0, 1.0, Some(strong_buy())),
    ]);
    let ranked = OpportunityRanker::rank(&instruments, 0.0, AnalysisMode::Swing, RiskLevel::Medium).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].timestamp, 1_700_000_000_000);
}

#[test]
fn test_rank_rejects_negative_min_volume() {
    let err = OpportunityRanker::rank(&HashMap::new(), -1.0, AnalysisMode::Swing, RiskLevel::Low).unwrap_err();
    assert!(matches!(err, ScanError::InvalidParameter(_)));
}
