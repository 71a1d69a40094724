//! Per-opportunity position sizing.
//!
//! The decision variable is `x`, the fraction of available capital deployed. The search
//! maximizes net return per dollar minus quadratic penalties for leverage above the knee and
//! size above the knee, inside
//!
//! ```text
//! max(lower_bound, break_even / capital) <= x <= min(upper_bound, max_position_risk, max_leverage)
//! ```
//!
//! where the last term is margin feasibility (`capital >= x * capital / max_leverage`).
//! When gross profit cannot cover fees the break-even fraction (1%) is deployed without a
//! search. When the search fails the fixed fallback fraction is used instead; failure never
//! reaches the caller.

use tracing::{debug, warn};
use crate::{
    config::OptimizerParams,
    errors::{AnalysisError, AnalysisResult, ErrorTally},
    types::{CommissionStructure, OptimizationResult, RawOpportunity},
    utils::{BPS_PER_UNIT, to_bps},
    validation::{validate_capital, validate_max_leverage},
};
use super::{
    SearchConfig, SearchError, break_even_position, effective_commission_rate, gross_profit_bps,
    maximize_bounded,
};

/// Cost and edge figures of one opportunity, fixed for the whole search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationInputs {
    pub commission_rate: f64,
    pub gross_profit_bps: f64,
    pub break_even_position: f64,
    /// Leverage the position is opened at; at least 1 and at most `max(max_leverage, 1)`.
    pub leverage_limit: f64,
}

pub struct AllocationOptimizer<'a> {
    params: &'a OptimizerParams,
    available_capital: f64,
    max_leverage: f64,
    min_net_profit_bps: f64,
}

impl<'a> AllocationOptimizer<'a> {
    pub fn new(
        params: &'a OptimizerParams,
        available_capital: f64,
        max_leverage: f64,
        min_net_profit_bps: f64,
    ) -> AnalysisResult<Self> {
        validate_capital(available_capital)?;
        validate_max_leverage(max_leverage)?;
        Ok(Self {
            params,
            available_capital,
            max_leverage,
            min_net_profit_bps,
        })
    }

    pub fn inputs(
        &self,
        opportunity: &RawOpportunity,
        source_fees: &CommissionStructure,
        target_fees: &CommissionStructure,
    ) -> AllocationInputs {
        let commission_rate = effective_commission_rate(
            source_fees,
            target_fees,
            opportunity.arbitrage_potential,
            self.params,
        );
        let gross_profit_bps = gross_profit_bps(
            opportunity.magnitude,
            opportunity.arbitrage_potential,
            opportunity.combined_edge,
            self.params,
        );
        let break_even_position = break_even_position(
            gross_profit_bps,
            commission_rate,
            self.min_net_profit_bps,
            self.available_capital,
            self.params,
        );
        AllocationInputs {
            commission_rate,
            gross_profit_bps,
            break_even_position,
            leverage_limit: opportunity.heuristic_leverage.min(self.max_leverage).max(1.0),
        }
    }

    pub fn optimize(
        &self,
        opportunity: &RawOpportunity,
        source_fees: &CommissionStructure,
        target_fees: &CommissionStructure,
    ) -> AnalysisResult<OptimizationResult> {
        self.optimize_with_tally(opportunity, source_fees, target_fees, &mut ErrorTally::new())
    }

    /// Like [`optimize`](Self::optimize), counting a recovered solver failure in `tally`.
    pub fn optimize_with_tally(
        &self,
        opportunity: &RawOpportunity,
        source_fees: &CommissionStructure,
        target_fees: &CommissionStructure,
        tally: &mut ErrorTally,
    ) -> AnalysisResult<OptimizationResult> {
        let pair = opportunity.pair_label();
        let inputs = self.inputs(opportunity, source_fees, target_fees);
        debug!(
            pair = %pair,
            commission_bps = to_bps(inputs.commission_rate),
            gross_profit_bps = inputs.gross_profit_bps,
            break_even_position = inputs.break_even_position,
            "Allocation inputs"
        );

        let (fraction, used_fallback) = if inputs.gross_profit_bps <= to_bps(inputs.commission_rate) {
            // nothing to optimize: every size loses to fees
            debug!(
                pair = %pair,
                fraction = self.params.break_even_fallback_fraction,
                "Gross edge does not cover fees; using break-even allocation"
            );
            (self.params.break_even_fallback_fraction, true)
        } else {
            match self.solve(&inputs) {
                Ok(fraction) => (fraction, false),
                Err(iterations) => {
                    let err = AnalysisError::NonConvergence {
                        pair: pair.clone(),
                        iterations,
                    };
                    tally.record(&pair, &err);
                    (self.params.fallback_fraction, true)
                }
            }
        };

        let mut result = self.derive(fraction, &inputs, used_fallback);
        self.enforce_risk_cap(&mut result);

        if result.net_profit_potential_bps < self.min_net_profit_bps {
            warn!(
                pair = %pair,
                net_profit_bps = result.net_profit_potential_bps,
                minimum = self.min_net_profit_bps,
                "Net profit below minimum after fees"
            );
        }

        ensure_finite(&pair, &result)?;
        Ok(result)
    }

    /// Returns the solved fraction, or the iteration count spent on failure.
    fn solve(&self, inputs: &AllocationInputs) -> Result<f64, usize> {
        let lower = self
            .params
            .lower_bound
            .max(inputs.break_even_position / self.available_capital);
        let upper = self
            .params
            .upper_bound
            .min(self.params.max_position_fraction())
            .min(self.max_leverage);

        let config = SearchConfig {
            initial_step: self.params.initial_step,
            tolerance: self.params.tolerance,
            max_iterations: self.params.max_iterations,
        };

        maximize_bounded(
            |x| self.objective(x, inputs),
            lower,
            upper,
            self.params.initial_guess,
            &config,
        )
        .map(|outcome| outcome.x)
        .map_err(|e| {
            debug!("Allocation search failed: {}", e);
            match e {
                SearchError::IterationLimit { iterations } => iterations,
                _ => 0,
            }
        })
    }

    /// Net return per dollar, penalized for leverage above the knee and oversized positions.
    pub fn objective(&self, fraction: f64, inputs: &AllocationInputs) -> f64 {
        let position = self.available_capital * fraction;
        if position <= 0.0 {
            return f64::NEG_INFINITY;
        }

        let leverage = effective_leverage(position, inputs.leverage_limit);
        let commission_cost = position * inputs.commission_rate;
        let gross_profit = position * inputs.gross_profit_bps / BPS_PER_UNIT;
        let net_profit = gross_profit - commission_cost;

        let knee = self.params.leverage_penalty_knee;
        let risk_penalty = ((leverage - knee) / knee).max(0.0).powi(2);
        let size_knee = self.params.size_penalty_knee;
        let size_penalty = ((fraction - size_knee) / (1.0 - size_knee)).max(0.0).powi(2);

        net_profit / position - risk_penalty - size_penalty
    }

    fn derive(&self, fraction: f64, inputs: &AllocationInputs, used_fallback: bool) -> OptimizationResult {
        let position = self.available_capital * fraction;
        let commission_cost = position * inputs.commission_rate;
        let gross_profit = position * inputs.gross_profit_bps / BPS_PER_UNIT;
        let net_profit = gross_profit - commission_cost;

        OptimizationResult {
            optimal_position_size_usd: position,
            effective_leverage: effective_leverage(position, inputs.leverage_limit),
            commission_cost_usd: commission_cost,
            net_profit_potential_bps: net_profit / position * BPS_PER_UNIT,
            risk_adjusted_return: net_profit / position,
            capital_efficiency: position / self.available_capital,
            break_even_move_bps: commission_cost / position * BPS_PER_UNIT,
            used_fallback,
        }
    }

    /// Shrinks position, commission and efficiency proportionally to fit the risk cap.
    fn enforce_risk_cap(&self, result: &mut OptimizationResult) {
        let max_position = (self.available_capital * self.params.max_position_fraction())
            .min(self.available_capital);
        if result.optimal_position_size_usd <= max_position {
            return;
        }

        let adjustment = max_position / result.optimal_position_size_usd;
        debug!(
            from = result.optimal_position_size_usd,
            to = max_position,
            "Position rescaled to risk cap"
        );
        result.optimal_position_size_usd = max_position;
        result.commission_cost_usd *= adjustment;
        result.capital_efficiency = max_position / self.available_capital;
    }
}

/// `position / margin` with margin posted at `leverage_limit`.
fn effective_leverage(position: f64, leverage_limit: f64) -> f64 {
    let margin = position / leverage_limit;
    if margin > 0.0 {
        (position / margin).clamp(1.0, leverage_limit)
    } else {
        leverage_limit
    }
}

fn ensure_finite(pair: &str, result: &OptimizationResult) -> AnalysisResult<()> {
    let fields = [
        ("optimal_position_size_usd", result.optimal_position_size_usd),
        ("effective_leverage", result.effective_leverage),
        ("commission_cost_usd", result.commission_cost_usd),
        ("net_profit_potential_bps", result.net_profit_potential_bps),
        ("risk_adjusted_return", result.risk_adjusted_return),
        ("capital_efficiency", result.capital_efficiency),
        ("break_even_move_bps", result.break_even_move_bps),
    ];
    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((quantity, _)) => Err(AnalysisError::NumericalInstability {
            pair: pair.to_string(),
            quantity,
        }),
        None => Ok(()),
    }
}
