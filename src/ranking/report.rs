use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::opportunity::Opportunity;
use crate::models::signal::SignalDirection;
use crate::ranking::filter::HIGH_PROBABILITY;

const TOP_PERFORMERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCounts {
    pub total: usize,
    pub high_probability: usize,
    pub buy: usize,
    pub sell: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub symbol: String,
    pub expected_return: f64,
    pub probability: u32,
}

/// Summary of one ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub generated_at: DateTime<Utc>,
    pub opportunities: OpportunityCounts,
    pub avg_probability: f64,
    pub avg_expected_return: f64,
    pub top_performers: Vec<TopPerformer>,
}

impl PerformanceReport {
    pub fn generate(opportunities: &[Opportunity], generated_at: DateTime<Utc>) -> Self {
        let total = opportunities.len();
        let count_direction = |direction: SignalDirection| {
            opportunities
                .iter()
                .filter(|o| o.direction() == direction)
                .count()
        };

        let (avg_probability, avg_expected_return) = if total == 0 {
            (0.0, 0.0)
        } else {
            let probability_sum: f64 = opportunities.iter().map(|o| o.probability() as f64).sum();
            let return_sum: f64 = opportunities.iter().map(|o| o.expected_return()).sum();
            (probability_sum / total as f64, return_sum / total as f64)
        };

        let mut by_return: Vec<&Opportunity> = opportunities.iter().collect();
        by_return.sort_by(|a, b| {
            b.expected_return()
                .total_cmp(&a.expected_return())
                .then_with(|| a.symbol().cmp(b.symbol()))
        });
        let top_performers = by_return
            .into_iter()
            .take(TOP_PERFORMERS)
            .map(|o| TopPerformer {
                symbol: o.symbol().to_string(),
                expected_return: o.expected_return(),
                probability: o.probability(),
            })
            .collect();

        Self {
            generated_at,
            opportunities: OpportunityCounts {
                total,
                high_probability: opportunities
                    .iter()
                    .filter(|o| o.probability() >= HIGH_PROBABILITY)
                    .count(),
                buy: count_direction(SignalDirection::Buy),
                sell: count_direction(SignalDirection::Sell),
            },
            avg_probability,
            avg_expected_return,
            top_performers,
        }
    }
}
