//! Analysis request parameters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::AssetProfile;
use crate::config::{
    DEFAULT_MAX_LEVERAGE, DEFAULT_MIN_NET_PROFIT_BPS, DEFAULT_MIN_SCORE, DEFAULT_TOP_K,
    DEFAULT_TOP_M,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Overrides the default registry when set.
    pub assets: Option<Vec<AssetProfile>>,
    pub available_capital: f64,
    pub max_leverage: f64,
    pub top_k: usize,
    pub top_m: usize,
    pub min_net_profit_bps: f64,
    pub min_score: f64,
    /// Reference time stamped on every record of the run.
    pub as_of: DateTime<Utc>,
}

impl AnalysisRequest {
    pub fn new(available_capital: f64, as_of: DateTime<Utc>) -> Self {
        Self {
            assets: None,
            available_capital,
            max_leverage: DEFAULT_MAX_LEVERAGE,
            top_k: DEFAULT_TOP_K,
            top_m: DEFAULT_TOP_M,
            min_net_profit_bps: DEFAULT_MIN_NET_PROFIT_BPS,
            min_score: DEFAULT_MIN_SCORE,
            as_of,
        }
    }

    pub fn with_assets(mut self, assets: Vec<AssetProfile>) -> Self {
        self.assets = Some(assets);
        self
    }

    pub fn with_max_leverage(mut self, max_leverage: f64) -> Self {
        self.max_leverage = max_leverage;
        self
    }
}
