//! Ranked opportunity types

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    CallSpreadAggressive,
    PutSpreadAggressive,
    StraddleCorrelation,
    IronCondorVolatility,
    ButterflyConservative,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::CallSpreadAggressive,
        Strategy::PutSpreadAggressive,
        Strategy::StraddleCorrelation,
        Strategy::IronCondorVolatility,
        Strategy::ButterflyConservative,
    ];

    /// Wire and display label.
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::CallSpreadAggressive => "CALL_SPREAD_AGGRESSIVE",
            Strategy::PutSpreadAggressive => "PUT_SPREAD_AGGRESSIVE",
            Strategy::StraddleCorrelation => "STRADDLE_CORRELATION",
            Strategy::IronCondorVolatility => "IRON_CONDOR_VOLATILITY",
            Strategy::ButterflyConservative => "BUTTERFLY_CONSERVATIVE",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Strategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Candidate derived from an affinity edge that cleared the ranking thresholds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawOpportunity {
    pub source: String,
    pub target: String,
    pub magnitude: f64,
    pub directional_bias: f64,
    pub correlation_strength: f64,
    pub arbitrage_potential: f64,
    pub strategy: Strategy,
    pub heuristic_leverage: f64,
    /// Harmonic mean of both assets' edge latency.
    pub combined_edge: f64,
    pub risk_score: f64,
    pub estimated_profit_bps: f64,
}

impl RawOpportunity {
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.source, self.target)
    }
}
