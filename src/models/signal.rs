use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Buy,
    Sell,
    Hold,
}

impl SignalDirection {
    /// Price direction the trade plan works in: +1 long, -1 short.
    ///
    /// `Hold` is priced on the short side, matching how the scanner has
    /// always planned non-buy calls.
    pub fn sign(&self) -> f64 {
        match self {
            SignalDirection::Buy => 1.0,
            SignalDirection::Sell | SignalDirection::Hold => -1.0,
        }
    }
}

/// Directional call for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub direction: SignalDirection,
    /// 0..=95
    pub probability: u32,
    pub reasons: Vec<String>,
    /// 0..=100
    pub strength: u32,
}
