//! Fully scored opportunity

use chrono::{DateTime, Utc};
use serde::Serialize;
use super::{OptimizationResult, RawOpportunity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegratedOpportunity {
    pub opportunity_id: String,
    pub timestamp: DateTime<Utc>,
    pub raw: RawOpportunity,
    pub optimization: OptimizationResult,
    pub profitability_score: f64,
    pub execution_priority: u8,
    pub time_horizon_minutes: u32,
    pub max_drawdown_pct: f64,
    pub is_profitable_after_fees: bool,
}
