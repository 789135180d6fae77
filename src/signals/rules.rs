//! Ordered rule evaluators feeding the signal analyzer.
//!
//! Each rule looks at one indicator and optionally casts a vote. Rule order
//! matters: the analyzer lets the first leading vote pick the direction.

use crate::models::indicators::IndicatorSet;
use crate::models::signal::SignalDirection;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const BB_LOWER_ZONE: f64 = 0.2;
pub const BB_UPPER_ZONE: f64 = 0.8;
pub const HIGH_VOLUME_RATIO: f64 = 2.0;

pub const RSI_WEIGHT: u32 = 15;
pub const MACD_WEIGHT: u32 = 10;
pub const BOLLINGER_WEIGHT: u32 = 10;
pub const VOLUME_WEIGHT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    Bullish,
    Bearish,
}

impl Bias {
    pub fn direction(&self) -> SignalDirection {
        match self {
            Bias::Bullish => SignalDirection::Buy,
            Bias::Bearish => SignalDirection::Sell,
        }
    }
}

/// How a vote interacts with the direction being built up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    /// Sets the direction if none is set yet; scores when it agrees.
    Leading(Bias),
    /// Never sets the direction; scores only when it agrees.
    Confirming(Bias),
    /// Direction-neutral; always scores.
    Unconditional,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleVote {
    pub kind: VoteKind,
    pub weight: u32,
    pub reason: String,
}

pub type Rule = fn(&IndicatorSet) -> Option<RuleVote>;

/// Evaluation order. Do not reorder without revisiting the tie-break.
pub const RULES: [Rule; 4] = [rsi_rule, macd_rule, bollinger_rule, volume_rule];

/// Run every rule in order and collect the votes that fired.
pub fn evaluate_rules(indicators: &IndicatorSet) -> Vec<RuleVote> {
    RULES.iter().filter_map(|rule| rule(indicators)).collect()
}

pub fn rsi_rule(indicators: &IndicatorSet) -> Option<RuleVote> {
    let rsi = indicators.rsi;
    if rsi < RSI_OVERSOLD {
        Some(RuleVote {
            kind: VoteKind::Leading(Bias::Bullish),
            weight: RSI_WEIGHT,
            reason: format!("RSI oversold: {:.2}", rsi),
        })
    } else if rsi > RSI_OVERBOUGHT {
        Some(RuleVote {
            kind: VoteKind::Leading(Bias::Bearish),
            weight: RSI_WEIGHT,
            reason: format!("RSI overbought: {:.2}", rsi),
        })
    } else {
        None
    }
}

pub fn macd_rule(indicators: &IndicatorSet) -> Option<RuleVote> {
    let macd = indicators.macd;
    if macd > 0.0 {
        Some(RuleVote {
            kind: VoteKind::Confirming(Bias::Bullish),
            weight: MACD_WEIGHT,
            reason: format!("MACD bullish: {:.4}", macd),
        })
    } else if macd < 0.0 {
        Some(RuleVote {
            kind: VoteKind::Confirming(Bias::Bearish),
            weight: MACD_WEIGHT,
            reason: format!("MACD bearish: {:.4}", macd),
        })
    } else {
        None
    }
}

pub fn bollinger_rule(indicators: &IndicatorSet) -> Option<RuleVote> {
    let position = indicators.bb_position;
    if position < BB_LOWER_ZONE {
        Some(RuleVote {
            kind: VoteKind::Confirming(Bias::Bullish),
            weight: BOLLINGER_WEIGHT,
            reason: format!("Price near lower Bollinger band: {:.2}", position),
        })
    } else if position > BB_UPPER_ZONE {
        Some(RuleVote {
            kind: VoteKind::Confirming(Bias::Bearish),
            weight: BOLLINGER_WEIGHT,
            reason: format!("Price near upper Bollinger band: {:.2}", position),
        })
    } else {
        None
    }
}

pub fn volume_rule(indicators: &IndicatorSet) -> Option<RuleVote> {
    let ratio = indicators.volume_ratio;
    if ratio > HIGH_VOLUME_RATIO {
        Some(RuleVote {
            kind: VoteKind::Unconditional,
            weight: VOLUME_WEIGHT,
            reason: format!("High volume: {:.2}x average", ratio),
        })
    } else {
        None
    }
}
