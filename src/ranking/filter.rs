use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScanError;
use crate::models::opportunity::Opportunity;
use crate::models::signal::SignalDirection;

pub const HIGH_PROBABILITY: u32 = 80;

/// View over a ranked list, as offered by the filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityFilter {
    #[default]
    All,
    Buy,
    Sell,
    #[serde(rename = "high-prob")]
    HighProbability,
}

impl OpportunityFilter {
    pub fn matches(&self, opportunity: &Opportunity) -> bool {
        match self {
            OpportunityFilter::All => true,
            OpportunityFilter::Buy => opportunity.direction() == SignalDirection::Buy,
            OpportunityFilter::Sell => opportunity.direction() == SignalDirection::Sell,
            OpportunityFilter::HighProbability => opportunity.probability() >= HIGH_PROBABILITY,
        }
    }

    /// Keep the matching entries, preserving rank order.
    pub fn apply<'a>(&self, opportunities: &'a [Opportunity]) -> Vec<&'a Opportunity> {
        opportunities.iter().filter(|o| self.matches(o)).collect()
    }
}

impl FromStr for OpportunityFilter {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(OpportunityFilter::All),
            "buy" => Ok(OpportunityFilter::Buy),
            "sell" => Ok(OpportunityFilter::Sell),
            "high-prob" => Ok(OpportunityFilter::HighProbability),
            other => Err(ScanError::InvalidParameter(format!("unknown filter '{}'", other))),
        }
    }
}
