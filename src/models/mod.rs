//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod opportunity;
pub mod params;
pub mod plan;
pub mod signal;

pub use indicators::{BollingerBands, Candle, IndicatorSet, MacdIndicator, SupportResistance};
pub use market::{InstrumentSnapshot, InstrumentState};
pub use opportunity::Opportunity;
pub use params::{AnalysisMode, RiskLevel, Timeframe};
pub use plan::{StopLoss, TargetLevel, TradePlan};
pub use signal::{Signal, SignalDirection};
