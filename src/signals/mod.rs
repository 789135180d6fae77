//! Rule-based signal synthesis.

pub mod analyzer;
pub mod rules;
pub mod scoring;

pub use analyzer::SignalAnalyzer;
pub use rules::{evaluate_rules, Bias, RuleVote, VoteKind};
pub use scoring::*;
