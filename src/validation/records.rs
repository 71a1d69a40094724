//! Invariant checks on generated records

use crate::types::{IntegratedOpportunity, OptimizationResult};

/// Position never exceeds the risk cap or the capital itself.
pub fn within_position_cap(
    result: &OptimizationResult,
    available_capital: f64,
    max_position_risk_pct: f64,
) -> bool {
    let cap = (available_capital * max_position_risk_pct / 100.0).min(available_capital);
    result.optimal_position_size_usd >= 0.0 && result.optimal_position_size_usd <= cap * (1.0 + 1e-12)
}

/// Score, priority and derived risk fields are inside their documented ranges.
pub fn within_record_bounds(opportunity: &IntegratedOpportunity) -> bool {
    (0.0..=10.0).contains(&opportunity.profitability_score)
        && (1..=10).contains(&opportunity.execution_priority)
        && opportunity.time_horizon_minutes > 0
        && opportunity.max_drawdown_pct > 0.0
        && opportunity.optimization.effective_leverage >= 1.0
        && (0.0..=1.0).contains(&opportunity.optimization.capital_efficiency)
}
