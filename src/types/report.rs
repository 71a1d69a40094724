//! Execution report types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use super::Strategy;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionDetails {
    pub size_usd: f64,
    pub leverage: f64,
    pub expected_profit_bps: f64,
    pub break_even_bps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskManagement {
    pub max_drawdown_pct: f64,
    pub time_horizon_min: u32,
    pub risk_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionParams {
    pub priority: u8,
    pub profitability_score: f64,
    pub capital_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffinityData {
    pub magnitude: f64,
    pub arbitrage_potential: f64,
    pub edge_latency: f64,
    pub directional_bias: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionOrder {
    pub opportunity_id: String,
    pub timestamp: DateTime<Utc>,
    pub pair: String,
    pub strategy: Strategy,
    pub position_details: PositionDetails,
    pub risk_management: RiskManagement,
    pub execution_params: ExecutionParams,
    pub affinity_data: AffinityData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SystemMetrics {
    pub total_opportunities_analyzed: usize,
    pub profitable_opportunities_found: usize,
    pub average_profitability_score: f64,
    pub total_capital_allocated: f64,
    pub expected_total_return_bps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionReport {
    pub generation_timestamp: DateTime<Utc>,
    pub system_version: String,
    pub available_capital: f64,
    pub execution_orders: Vec<ExecutionOrder>,
    pub system_metrics: SystemMetrics,
    pub total_orders: usize,
    /// Per-kind count of per-pair errors during the run, recovered fallbacks included.
    pub pair_errors: BTreeMap<String, u32>,
}
