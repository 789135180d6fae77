use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetLevel {
    pub level: u32,
    pub price: f64,
    /// Signed: positive means the move the plan is betting on.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StopLoss {
    pub price: f64,
    /// Risk magnitude, always positive.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradePlan {
    pub targets: Vec<TargetLevel>,
    pub stop_loss: StopLoss,
    pub expected_return: f64,
}
