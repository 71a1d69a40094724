//! Profitability score and execution priority

use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::{
    config::ScoringWeights,
    types::{IntegratedOpportunity, OptimizationResult, RawOpportunity},
    utils::round_to,
};
use super::{max_drawdown_pct, time_horizon_minutes};

/// Individual, already capped contributions to the profitability score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub profit: f64,
    pub risk: f64,
    pub efficiency: f64,
    pub affinity: f64,
    pub edge: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.profit + self.risk + self.efficiency + self.affinity + self.edge
    }
}

/// `ratio` clamped to [0, 1] and scaled to `points`.
fn capped(ratio: f64, points: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0) * points
}

pub fn score_breakdown(
    raw: &RawOpportunity,
    result: &OptimizationResult,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    ScoreBreakdown {
        profit: capped(
            result.net_profit_potential_bps / weights.profit_scale_bps,
            weights.profit_points,
        ),
        risk: capped(1.0 - result.risk_adjusted_return.abs(), weights.risk_points),
        efficiency: capped(
            result.capital_efficiency * weights.efficiency_scale,
            weights.efficiency_points,
        ),
        affinity: capped(raw.magnitude / weights.affinity_scale, weights.affinity_points),
        edge: capped(raw.combined_edge / weights.edge_scale, weights.edge_points),
    }
}

/// Score in [0, 10], rounded to one decimal.
pub fn profitability_score(
    raw: &RawOpportunity,
    result: &OptimizationResult,
    weights: &ScoringWeights,
) -> f64 {
    round_to(score_breakdown(raw, result, weights).total(), 1).clamp(0.0, 10.0)
}

/// Priority in [1, 10].
pub fn execution_priority(score: f64, result: &OptimizationResult, weights: &ScoringWeights) -> u8 {
    let mut priority = (score.max(0.0).floor() as u8).min(weights.priority_score_cap);
    if result.capital_efficiency > weights.efficiency_bonus_threshold {
        priority += 1;
    }
    if result.net_profit_potential_bps > weights.profit_bonus_threshold_bps {
        priority += 1;
    }
    priority.clamp(1, 10)
}

/// Stable identifier for a pair within one run.
pub fn opportunity_id(raw: &RawOpportunity, as_of: DateTime<Utc>) -> String {
    let name = format!("{}/{}@{}", raw.source, raw.target, as_of.timestamp());
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

/// Combines a ranked candidate and its allocation into the terminal record.
pub fn integrate_opportunity(
    raw: RawOpportunity,
    optimization: OptimizationResult,
    weights: &ScoringWeights,
    min_net_profit_bps: f64,
    as_of: DateTime<Utc>,
) -> IntegratedOpportunity {
    let score = profitability_score(&raw, &optimization, weights);
    IntegratedOpportunity {
        opportunity_id: opportunity_id(&raw, as_of),
        timestamp: as_of,
        execution_priority: execution_priority(score, &optimization, weights),
        time_horizon_minutes: time_horizon_minutes(&optimization, &weights.horizon),
        max_drawdown_pct: max_drawdown_pct(optimization.effective_leverage, weights),
        is_profitable_after_fees: optimization.net_profit_potential_bps >= min_net_profit_bps,
        profitability_score: score,
        raw,
        optimization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strategy;
    use chrono::TimeZone;

    fn raw(magnitude: f64, combined_edge: f64) -> RawOpportunity {
        RawOpportunity {
            source: "BTCUSDT".to_string(),
            target: "DOGEUSDT".to_string(),
            magnitude,
            directional_bias: -0.2,
            correlation_strength: 0.78,
            arbitrage_potential: 0.134,
            strategy: Strategy::IronCondorVolatility,
            heuristic_leverage: 15.0,
            combined_edge,
            risk_score: 0.45,
            estimated_profit_bps: 104.0,
        }
    }

    fn result(net_bps: f64, efficiency: f64, leverage: f64) -> OptimizationResult {
        OptimizationResult {
            optimal_position_size_usd: efficiency * 10_000.0,
            effective_leverage: leverage,
            commission_cost_usd: 0.0,
            net_profit_potential_bps: net_bps,
            risk_adjusted_return: net_bps / 10_000.0,
            capital_efficiency: efficiency,
            break_even_move_bps: 0.0,
            used_fallback: false,
        }
    }

    #[test]
    fn score_components_are_capped() {
        let weights = ScoringWeights::default();
        let breakdown = score_breakdown(&raw(1.0e6, 30.0), &result(1_000.0, 0.5, 5.0), &weights);
        assert_eq!(breakdown.profit, 3.0);
        assert_eq!(breakdown.efficiency, 2.0);
        assert_eq!(breakdown.affinity, 2.0);
        assert_eq!(breakdown.edge, 1.0);
        assert!(breakdown.risk <= 2.0);
        assert!(profitability_score(&raw(1.0e6, 30.0), &result(1_000.0, 0.5, 5.0), &weights) <= 10.0);
    }

    #[test]
    fn negative_net_profit_contributes_nothing() {
        let weights = ScoringWeights::default();
        let breakdown = score_breakdown(&raw(100.0, 2.0), &result(-40.0, 0.05, 5.0), &weights);
        assert_eq!(breakdown.profit, 0.0);
        assert!(profitability_score(&raw(100.0, 2.0), &result(-40.0, 0.05, 5.0), &weights) >= 0.0);
    }

    #[test]
    fn typical_score() {
        // 17.9 bps net, 5% of capital, strong affinity
        let weights = ScoringWeights::default();
        let score = profitability_score(&raw(12_280.0, 2.396), &result(17.9, 0.05, 15.0), &weights);
        let expected = 17.9 / 50.0 * 3.0 + (1.0 - 0.00179) * 2.0 + 1.0 + 2.0 + 2.396 / 3.0;
        assert_eq!(score, round_to(expected, 1));
    }

    #[test]
    fn priority_bonuses_and_bounds() {
        let weights = ScoringWeights::default();
        assert_eq!(execution_priority(9.7, &result(40.0, 0.2, 5.0), &weights), 10);
        assert_eq!(execution_priority(6.9, &result(20.0, 0.05, 5.0), &weights), 6);
        assert_eq!(execution_priority(6.9, &result(35.0, 0.05, 5.0), &weights), 7);
        assert_eq!(execution_priority(0.4, &result(-5.0, 0.01, 5.0), &weights), 1);
    }

    #[test]
    fn profitability_flag_uses_threshold() {
        let weights = ScoringWeights::default();
        let as_of = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let at = integrate_opportunity(raw(12_280.0, 2.396), result(15.0, 0.05, 15.0), &weights, 15.0, as_of);
        let below = integrate_opportunity(raw(12_280.0, 2.396), result(14.9, 0.05, 15.0), &weights, 15.0, as_of);
        assert!(at.is_profitable_after_fees);
        assert!(!below.is_profitable_after_fees);
        assert_eq!(at.time_horizon_minutes, 15);
        assert_eq!(at.max_drawdown_pct, 4.5);
    }

    #[test]
    fn ids_are_deterministic_per_pair_and_time() {
        let as_of = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 1).unwrap();
        let opp = raw(100.0, 2.0);
        assert_eq!(opportunity_id(&opp, as_of), opportunity_id(&opp, as_of));
        assert_ne!(opportunity_id(&opp, as_of), opportunity_id(&opp, later));
    }
}
