//! Asset profile types

use serde::{Deserialize, Serialize};

/// Traded volume bucket of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeTier {
    UltraHigh,
    VeryHigh,
    High,
    Medium,
    Low,
}

impl VolumeTier {
    /// Categorical score used for the volume correlation of a pair.
    pub fn score(self) -> f64 {
        match self {
            VolumeTier::UltraHigh => 1.0,
            VolumeTier::VeryHigh => 0.85,
            VolumeTier::High => 0.70,
            VolumeTier::Medium => 0.50,
            VolumeTier::Low => 0.25,
        }
    }
}

/// Coarse asset category; keys the pairwise correlation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    StoreOfValue,
    SmartContract,
    HighThroughput,
    ExchangeToken,
    ProofOfStake,
    Meme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProfile {
    pub symbol: String,
    pub class: AssetClass,
    /// Timing-advantage proxy, strictly positive.
    pub edge_latency: f64,
    /// (min, max) leverage the venue offers for this asset.
    pub leverage_range: (u32, u32),
    pub volume_tier: VolumeTier,
    /// Relative weight of the asset in the affinity computation, strictly positive.
    pub mass: f64,
    pub coverage_ratio: f64,
    pub liquidity_score: f64,
}

impl AssetProfile {
    pub fn mean_leverage(&self) -> f64 {
        (self.leverage_range.0 as f64 + self.leverage_range.1 as f64) / 2.0
    }
}
