use crate::error::{Result, ScanError};
use crate::models::params::{AnalysisMode, RiskLevel};
use crate::models::plan::{StopLoss, TargetLevel, TradePlan};
use crate::models::signal::SignalDirection;

/// Weight of the average-target gain in the expected return.
pub const REWARD_WEIGHT: f64 = 0.7;
/// Weight of the stop-loss loss in the expected return.
pub const RISK_WEIGHT: f64 = 0.3;

/// Profit target ladder as fractions of the entry price.
pub fn target_multipliers(mode: AnalysisMode) -> [f64; 3] {
    match mode {
        AnalysisMode::Scalping => [0.005, 0.01, 0.015],
        AnalysisMode::Swing => [0.03, 0.06, 0.12],
        AnalysisMode::Position => [0.1, 0.2, 0.35],
    }
}

/// Stop-loss distance as a fraction of the entry price.
pub fn stop_loss_fraction(risk: RiskLevel) -> f64 {
    match risk {
        RiskLevel::Low => 0.02,
        RiskLevel::Medium => 0.04,
        RiskLevel::High => 0.08,
    }
}

pub struct TradePlanner;

impl TradePlanner {
    /// Plan a trade at `price`.
    ///
    /// `Hold` is planned on the short side like `Sell`.
    pub fn plan(
        price: f64,
        direction: SignalDirection,
        mode: AnalysisMode,
        risk: RiskLevel,
    ) -> Result<TradePlan> {
        if !(price.is_finite() && price > 0.0) {
            return Err(ScanError::InvalidParameter(format!(
                "price must be a positive number, got {}",
                price
            )));
        }

        let dir = direction.sign();

        let targets: Vec<TargetLevel> = target_multipliers(mode)
            .iter()
            .enumerate()
            .map(|(i, mult)| TargetLevel {
                level: i as u32 + 1,
                price: price * (1.0 + mult * dir),
                percentage: mult * 100.0 * dir,
            })
            .collect();

        let stop_fraction = stop_loss_fraction(risk);
        let stop_loss = StopLoss {
            price: price * (1.0 - stop_fraction * dir),
            percentage: stop_fraction * 100.0,
        };

        let expected_return = expected_return(price, dir, &targets, &stop_loss);

        Ok(TradePlan {
            targets,
            stop_loss,
            expected_return,
        })
    }
}

/// `0.7 * gain% - 0.3 * loss%`, both measured in the trade's favour.
fn expected_return(price: f64, dir: f64, targets: &[TargetLevel], stop_loss: &StopLoss) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    let avg_target = targets.iter().map(|t| t.price).sum::<f64>() / targets.len() as f64;
    let gain_pct = (avg_target - price) / price * 100.0 * dir;
    let loss_pct = (price - stop_loss.price) / price * 100.0 * dir;
    REWARD_WEIGHT * gain_pct - RISK_WEIGHT * loss_pct
}
