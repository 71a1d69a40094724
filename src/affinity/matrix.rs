//! Affinity matrix construction.
//!
//! The "force" between two assets is a tunable heuristic that blends a mass-like weight,
//! an inverse-square latency distance and a categorical volume correlation into one scalar:
//!
//! ```text
//! magnitude = K * m_i * m_j / max(|l_i - l_j|, floor)^2 * sqrt(v_i * v_j) * coherence
//! ```
//!
//! Direction matters only through `directional_bias`, which compares mean leverage, so
//! `magnitude(i, j)` and `magnitude(j, i)` are free to coincide or differ as the inputs dictate.

use tracing::debug;
use crate::{
    config::AffinityParams,
    types::{AffinityForce, AffinityMatrix, AssetProfile},
    utils::{clamp_unit, mean},
};
use super::{class_correlation, volume_correlation};

/// Builds every directed edge (i, j), i != j, in registry order.
pub fn build_affinity_matrix(assets: &[AssetProfile], params: &AffinityParams) -> AffinityMatrix {
    if assets.len() < 2 {
        return AffinityMatrix::default();
    }

    let edges = assets
        .iter()
        .enumerate()
        .map(|(i, source)| {
            let forces = assets
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, target)| pairwise_force(source, target, params))
                .collect();
            (source.symbol.clone(), forces)
        })
        .collect();

    let matrix = AffinityMatrix { edges };
    debug!(
        assets = assets.len(),
        edges = matrix.edge_count(),
        "Affinity matrix built"
    );
    matrix
}

pub fn pairwise_force(
    source: &AssetProfile,
    target: &AssetProfile,
    params: &AffinityParams,
) -> AffinityForce {
    let distance = latency_distance(source, target, params);
    let combined_weight = source.mass * target.mass;
    let base_magnitude = params.force_constant * combined_weight / distance.powi(2);
    let magnitude = (base_magnitude
        * volume_correlation(source.volume_tier, target.volume_tier)
        * params.coherence_threshold)
        .max(0.0);

    let leverage_diff = target.mean_leverage() - source.mean_leverage();
    let directional_bias = (leverage_diff / params.leverage_bias_scale).tanh();

    AffinityForce {
        source: source.symbol.clone(),
        target: target.symbol.clone(),
        magnitude,
        directional_bias,
        correlation_strength: class_correlation(source.class, target.class, params.default_correlation),
        arbitrage_potential: arbitrage_potential(source, target, distance, params),
    }
}

fn latency_distance(source: &AssetProfile, target: &AssetProfile, params: &AffinityParams) -> f64 {
    (source.edge_latency - target.edge_latency)
        .abs()
        .max(params.distance_floor)
}

/// Larger attribute gaps mean a larger exploitable discrepancy.
fn arbitrage_potential(
    source: &AssetProfile,
    target: &AssetProfile,
    distance: f64,
    params: &AffinityParams,
) -> f64 {
    let coverage_gap = (source.coverage_ratio - target.coverage_ratio).abs();
    let liquidity_gap = (source.liquidity_score - target.liquidity_score).abs();
    clamp_unit(params.amplification_factor * mean(&[coverage_gap, liquidity_gap, distance / 10.0]))
}
