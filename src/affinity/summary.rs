//! Per-source digest of an affinity matrix

use std::cmp::Ordering;
use crate::{
    types::{AffinityForce, AffinityMatrix, MatrixSummary, SourceSummary},
    utils::mean,
};

pub fn summarize_matrix(matrix: &AffinityMatrix) -> MatrixSummary {
    let magnitudes: Vec<f64> = matrix.forces().map(|f| f.magnitude).collect();

    let sources = matrix
        .edges
        .iter()
        .filter_map(|(source, forces)| {
            Some(SourceSummary {
                source: source.clone(),
                strongest_attraction: max_by(forces, |f| f.magnitude)?.target.clone(),
                strongest_repulsion: max_by(forces, |f| -f.directional_bias)?.target.clone(),
                best_arbitrage_target: max_by(forces, |f| f.arbitrage_potential)?.target.clone(),
                total_forces: forces.len(),
            })
        })
        .collect();

    MatrixSummary {
        total_forces: magnitudes.len(),
        average_magnitude: mean(&magnitudes),
        sources,
    }
}

/// First force with the largest key; earlier edges win ties.
fn max_by(forces: &[AffinityForce], key: impl Fn(&AffinityForce) -> f64) -> Option<&AffinityForce> {
    forces.iter().fold(None, |best, force| match best {
        Some(current) if key(force).partial_cmp(&key(current)) != Some(Ordering::Greater) => {
            Some(current)
        }
        _ => Some(force),
    })
}
