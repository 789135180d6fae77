use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{Result, ScanError};
use crate::models::market::InstrumentState;
use crate::models::opportunity::Opportunity;
use crate::models::params::{AnalysisMode, RiskLevel};
use crate::planner::TradePlanner;
use crate::signals::SignalAnalyzer;

/// Calls below this probability are dropped.
pub const MIN_PROBABILITY: u32 = 60;
/// Longest list a pass returns.
pub const MAX_OPPORTUNITIES: usize = 30;

pub struct OpportunityRanker;

impl OpportunityRanker {
    /// Score every instrument and return the best, highest first.
    ///
    /// Instruments trading below `min_volume`, lacking indicators or carrying
    /// an unusable price are skipped. The sort key is
    /// `probability * expected_return`; equal keys fall back to symbol order.
    pub fn rank(
        instruments: &HashMap<String, InstrumentState>,
        min_volume: f64,
        mode: AnalysisMode,
        risk: RiskLevel,
    ) -> Result<Vec<Opportunity>> {
        if !(min_volume.is_finite() && min_volume >= 0.0) {
            return Err(ScanError::InvalidParameter(format!(
                "min_volume must be a non-negative number, got {}",
                min_volume
            )));
        }

        let mut below_volume = 0usize;
        let mut missing_indicators = 0usize;
        let mut low_probability = 0usize;
        let mut opportunities = Vec::new();

        for (symbol, state) in instruments {
            let snapshot = &state.snapshot;
            if snapshot.volume < min_volume {
                below_volume += 1;
                continue;
            }
            let indicators = match &state.indicators {
                Some(indicators) => indicators,
                None => {
                    missing_indicators += 1;
                    continue;
                }
            };

            let signal = SignalAnalyzer::analyze(indicators, snapshot.change_24h, mode, risk);
            if signal.probability < MIN_PROBABILITY {
                low_probability += 1;
                continue;
            }

            let plan = match TradePlanner::plan(snapshot.price, signal.direction, mode, risk) {
                Ok(plan) => plan,
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "OpportunityRanker: skipping instrument");
                    continue;
                }
            };

            opportunities.push(Opportunity {
                snapshot: snapshot.clone(),
                indicators: indicators.clone(),
                signal,
                plan,
                timestamp: snapshot.timestamp,
            });
        }

        opportunities.sort_by(compare_opportunities);
        opportunities.truncate(MAX_OPPORTUNITIES);

        debug!(
            instruments = instruments.len(),
            below_volume,
            missing_indicators,
            low_probability,
            ranked = opportunities.len(),
            "OpportunityRanker: ranked {} opportunities",
            opportunities.len()
        );

        Ok(opportunities)
    }
}

/// Descending by score, ascending by symbol on ties.
///
/// The score mixes a bounded probability with a signed return, so a
/// high-probability call with a negative expected return sorts below a
/// weaker call that expects a gain.
pub fn compare_opportunities(a: &Opportunity, b: &Opportunity) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| a.symbol().cmp(b.symbol()))
}
