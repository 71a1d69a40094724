//! Pairwise affinity types

use serde::Serialize;

/// Directed affinity edge between two assets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffinityForce {
    pub source: String,
    pub target: String,
    pub magnitude: f64,
    /// -1 (repulsion) to +1 (attraction).
    pub directional_bias: f64,
    /// Symmetric across direction.
    pub correlation_strength: f64,
    pub arbitrage_potential: f64,
}

impl AffinityForce {
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.source, self.target)
    }
}

/// Adjacency structure of all directed edges, grouped by source in registry order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AffinityMatrix {
    pub edges: Vec<(String, Vec<AffinityForce>)>,
}

impl AffinityMatrix {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|(_, forces)| forces.len()).sum()
    }

    pub fn forces(&self) -> impl Iterator<Item = &AffinityForce> {
        self.edges.iter().flat_map(|(_, forces)| forces.iter())
    }

    pub fn get(&self, source: &str, target: &str) -> Option<&AffinityForce> {
        self.edges
            .iter()
            .find(|(s, _)| s == source)
            .and_then(|(_, forces)| forces.iter().find(|f| f.target == target))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub source: String,
    pub strongest_attraction: String,
    pub strongest_repulsion: String,
    pub best_arbitrage_target: String,
    pub total_forces: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatrixSummary {
    pub total_forces: usize,
    pub average_magnitude: f64,
    pub sources: Vec<SourceSummary>,
}
