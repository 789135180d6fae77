//! Opportunity ranking and the views built on top of a ranked list.

pub mod filter;
pub mod ranker;
pub mod report;

pub use filter::OpportunityFilter;
pub use ranker::{compare_opportunities, OpportunityRanker, MAX_OPPORTUNITIES, MIN_PROBABILITY};
pub use report::{PerformanceReport, TopPerformer};
