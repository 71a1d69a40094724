//! Capital allocation result types

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    pub optimal_position_size_usd: f64,
    pub effective_leverage: f64,
    pub commission_cost_usd: f64,
    pub net_profit_potential_bps: f64,
    pub risk_adjusted_return: f64,
    pub capital_efficiency: f64,
    pub break_even_move_bps: f64,
    /// True when a fixed allocation replaced the search (fees above the gross edge, or no convergence).
    pub used_fallback: bool,
}

/// One row of a commission impact sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionImpact {
    pub position_size_usd: f64,
    pub commission_cost_usd: f64,
    pub commission_bps: f64,
    pub break_even_move_bps: f64,
    pub capital_efficiency: f64,
}
