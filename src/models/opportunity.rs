use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorSet;
use crate::models::market::InstrumentSnapshot;
use crate::models::plan::TradePlan;
use crate::models::signal::{Signal, SignalDirection};

/// A scored instrument produced by one analysis pass.
///
/// Opportunities do not outlive their pass; the next pass replaces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub snapshot: InstrumentSnapshot,
    pub indicators: IndicatorSet,
    pub signal: Signal,
    pub plan: TradePlan,
    pub timestamp: i64,
}

impl Opportunity {
    pub fn symbol(&self) -> &str {
        &self.snapshot.symbol
    }

    pub fn direction(&self) -> SignalDirection {
        self.signal.direction
    }

    pub fn probability(&self) -> u32 {
        self.signal.probability
    }

    pub fn expected_return(&self) -> f64 {
        self.plan.expected_return
    }

    /// Ranking key: probability times expected return.
    pub fn score(&self) -> f64 {
        self.signal.probability as f64 * self.plan.expected_return
    }
}
