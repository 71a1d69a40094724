//! Opportunity derivation from affinity edges

use std::cmp::Ordering;
use tracing::debug;
use crate::{
    config::RankingParams,
    errors::{AnalysisError, AnalysisResult},
    registry::find_asset,
    types::{AffinityForce, AffinityMatrix, AssetProfile, RawOpportunity},
    utils::{clamp_unit, harmonic_mean, mean},
};
use super::select_strategy;

/// Outcome of ranking: surviving candidates plus the edges that could not be derived.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    pub opportunities: Vec<RawOpportunity>,
    pub failures: Vec<(String, AnalysisError)>,
}

pub fn passes_thresholds(force: &AffinityForce, params: &RankingParams) -> bool {
    force.magnitude > params.magnitude_threshold
        && force.arbitrage_potential > params.potential_threshold
}

/// Filters, derives and returns the top-K candidates by arbitrage potential.
pub fn rank_opportunities(
    matrix: &AffinityMatrix,
    assets: &[AssetProfile],
    params: &RankingParams,
) -> Ranking {
    let mut ranking = Ranking::default();

    for force in matrix.forces().filter(|f| passes_thresholds(f, params)) {
        match derive_opportunity(force, assets, params) {
            Ok(opportunity) => {
                debug!(
                    pair = %opportunity.pair_label(),
                    strategy = %opportunity.strategy,
                    potential = opportunity.arbitrage_potential,
                    "Candidate retained"
                );
                ranking.opportunities.push(opportunity);
            }
            Err(e) => ranking.failures.push((force.pair_label(), e)),
        }
    }

    // stable: equal potentials keep matrix order
    ranking.opportunities.sort_by(|a, b| {
        b.arbitrage_potential
            .partial_cmp(&a.arbitrage_potential)
            .unwrap_or(Ordering::Equal)
    });
    ranking.opportunities.truncate(params.top_k);
    ranking
}

pub fn derive_opportunity(
    force: &AffinityForce,
    assets: &[AssetProfile],
    params: &RankingParams,
) -> AnalysisResult<RawOpportunity> {
    let lookup = |symbol: &str| {
        find_asset(assets, symbol).ok_or_else(|| AnalysisError::UnknownAsset {
            symbol: symbol.to_string(),
            pair: force.pair_label(),
        })
    };
    let source = lookup(&force.source)?;
    let target = lookup(&force.target)?;

    Ok(RawOpportunity {
        source: force.source.clone(),
        target: force.target.clone(),
        magnitude: force.magnitude,
        directional_bias: force.directional_bias,
        correlation_strength: force.correlation_strength,
        arbitrage_potential: force.arbitrage_potential,
        strategy: select_strategy(force, &params.strategy_thresholds),
        heuristic_leverage: heuristic_leverage(source, target, force, params),
        combined_edge: harmonic_mean(source.edge_latency, target.edge_latency),
        risk_score: risk_score(force, params),
        estimated_profit_bps: estimated_profit_bps(force, params),
    })
}

pub fn heuristic_leverage(
    source: &AssetProfile,
    target: &AssetProfile,
    force: &AffinityForce,
    params: &RankingParams,
) -> f64 {
    let base = (source.mean_leverage() + target.mean_leverage()) / 2.0;
    let magnitude_multiplier =
        (force.magnitude / params.leverage_magnitude_scale).min(params.leverage_magnitude_cap);
    let potential_multiplier = 1.0 + force.arbitrage_potential;
    (base * magnitude_multiplier * potential_multiplier).min(params.leverage_cap)
}

/// 0 is safest.
pub fn risk_score(force: &AffinityForce, params: &RankingParams) -> f64 {
    let correlation_risk = 1.0 - force.correlation_strength;
    let magnitude_risk = (force.magnitude / params.risk_magnitude_scale).min(1.0);
    let potential_risk = 1.0 - force.arbitrage_potential;
    clamp_unit(mean(&[correlation_risk, magnitude_risk, potential_risk]))
}

pub fn estimated_profit_bps(force: &AffinityForce, params: &RankingParams) -> f64 {
    let base = force.arbitrage_potential * params.profit_base_bps;
    let magnitude_amplification =
        (force.magnitude / params.profit_magnitude_scale).min(params.profit_magnitude_cap);
    let correlation_amplification = force.correlation_strength * 2.0;
    (base * magnitude_amplification * correlation_amplification)
        .clamp(0.0, params.profit_ceiling_bps)
}
