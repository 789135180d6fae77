//! Trend indicators: SMA, EMA

pub mod ema;

pub use ema::*;
