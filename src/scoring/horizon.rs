//! Time horizon and drawdown budget

use crate::{
    config::{HorizonCondition, HorizonRules, ScoringWeights},
    types::OptimizationResult,
    utils::round_to,
};

impl HorizonCondition {
    pub fn matches(&self, result: &OptimizationResult) -> bool {
        match *self {
            HorizonCondition::LeverageAbove(leverage) => result.effective_leverage > leverage,
            HorizonCondition::NetProfitAbove(bps) => result.net_profit_potential_bps > bps,
        }
    }
}

pub fn time_horizon_minutes(result: &OptimizationResult, rules: &HorizonRules) -> u32 {
    rules
        .rules
        .iter()
        .find(|rule| rule.condition.matches(result))
        .map(|rule| rule.minutes)
        .unwrap_or(rules.default_minutes)
        .max(1)
}

pub fn max_drawdown_pct(effective_leverage: f64, weights: &ScoringWeights) -> f64 {
    let leverage_adjustment =
        (effective_leverage / weights.drawdown_leverage_scale).min(weights.drawdown_leverage_cap);
    round_to(weights.drawdown_base_pct * leverage_adjustment, 1)
}
