//! Folds rule votes into a single directional call.

use tracing::trace;

use crate::models::indicators::IndicatorSet;
use crate::models::params::{AnalysisMode, RiskLevel};
use crate::models::signal::{Signal, SignalDirection};
use crate::signals::rules::{evaluate_rules, RuleVote, VoteKind};
use crate::signals::scoring::{calculate_strength, clamp_probability, BASE_PROBABILITY};

pub struct SignalAnalyzer;

impl SignalAnalyzer {
    /// Score one instrument.
    ///
    /// The first leading vote sets the direction; confirming votes add weight
    /// only when they agree with it. Every fired rule contributes its reason.
    /// With no direction set the call is `Hold`.
    pub fn analyze(
        indicators: &IndicatorSet,
        change_24h: f64,
        mode: AnalysisMode,
        risk: RiskLevel,
    ) -> Signal {
        let votes = evaluate_rules(indicators);
        let signal = Self::fold(&votes, indicators);

        trace!(
            change_24h,
            mode = %mode,
            risk = %risk,
            direction = ?signal.direction,
            probability = signal.probability,
            votes = votes.len(),
            "SignalAnalyzer: scored instrument"
        );

        signal
    }

    fn fold(votes: &[RuleVote], indicators: &IndicatorSet) -> Signal {
        let mut direction: Option<SignalDirection> = None;
        let mut probability = BASE_PROBABILITY;
        let mut reasons = Vec::with_capacity(votes.len());

        for vote in votes {
            reasons.push(vote.reason.clone());
            match vote.kind {
                VoteKind::Leading(bias) => match direction {
                    None => {
                        direction = Some(bias.direction());
                        probability += vote.weight;
                    }
                    Some(current) if current == bias.direction() => probability += vote.weight,
                    Some(_) => {}
                },
                VoteKind::Confirming(bias) => {
                    if direction == Some(bias.direction()) {
                        probability += vote.weight;
                    }
                }
                VoteKind::Unconditional => probability += vote.weight,
            }
        }

        let strength = calculate_strength(reasons.len(), indicators.volume_ratio, indicators.rsi);

        Signal {
            direction: direction.unwrap_or(SignalDirection::Hold),
            probability: clamp_probability(probability),
            reasons,
            strength,
        }
    }
}
