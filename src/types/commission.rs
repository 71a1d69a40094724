//! Fee, slippage and funding structure per asset

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommissionStructure {
    pub maker_fee: f64,
    pub taker_fee: f64,
    /// Annualized funding rate.
    pub funding_rate: f64,
    pub slippage_bps: f64,
}

impl CommissionStructure {
    pub const fn new(maker_fee: f64, taker_fee: f64, funding_rate: f64, slippage_bps: f64) -> Self {
        Self {
            maker_fee,
            taker_fee,
            funding_rate,
            slippage_bps,
        }
    }
}
