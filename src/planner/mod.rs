//! Trade plan construction: targets, stop-loss and expected return.

pub mod trade_plan;

pub use trade_plan::*;
