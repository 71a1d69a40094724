//! Filters, ranks and aggregates integrated opportunities into the execution report

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use crate::{
    config::SYSTEM_VERSION,
    types::{
        AffinityData, ExecutionOrder, ExecutionParams, ExecutionReport, IntegratedOpportunity,
        PositionDetails, RiskManagement, SystemMetrics,
    },
    utils::{BPS_PER_UNIT, mean, round_to},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub available_capital: f64,
    pub top_m: usize,
    pub min_score: f64,
    pub generated_at: DateTime<Utc>,
}

pub fn build_execution_report(
    opportunities: &[IntegratedOpportunity],
    options: &ReportOptions,
    pair_errors: BTreeMap<String, u32>,
) -> ExecutionReport {
    let mut profitable: Vec<&IntegratedOpportunity> = opportunities
        .iter()
        .filter(|o| o.is_profitable_after_fees && o.profitability_score >= options.min_score)
        .collect();
    profitable.sort_by(|a, b| {
        b.profitability_score
            .partial_cmp(&a.profitability_score)
            .unwrap_or(Ordering::Equal)
    });

    let mut system_metrics = SystemMetrics {
        total_opportunities_analyzed: opportunities.len(),
        profitable_opportunities_found: profitable.len(),
        ..SystemMetrics::default()
    };
    if !profitable.is_empty() {
        let scores: Vec<f64> = profitable.iter().map(|o| o.profitability_score).collect();
        system_metrics.average_profitability_score = round_to(mean(&scores), 2);
    }

    profitable.truncate(options.top_m);
    let (allocated, expected_return_bps) = capital_weighted_return(&profitable);
    system_metrics.total_capital_allocated = allocated;
    system_metrics.expected_total_return_bps = round_to(expected_return_bps, 1);

    let execution_orders: Vec<ExecutionOrder> =
        profitable.into_iter().map(execution_order).collect();

    ExecutionReport {
        generation_timestamp: options.generated_at,
        system_version: SYSTEM_VERSION.to_string(),
        available_capital: options.available_capital,
        total_orders: execution_orders.len(),
        execution_orders,
        system_metrics,
        pair_errors,
    }
}

/// Total allocated capital and the capital-weighted net return in bps.
fn capital_weighted_return(orders: &[&IntegratedOpportunity]) -> (f64, f64) {
    let allocated: f64 = orders
        .iter()
        .map(|o| o.optimization.optimal_position_size_usd)
        .sum();
    if allocated <= 0.0 {
        return (0.0, 0.0);
    }

    let expected_return: f64 = orders
        .iter()
        .map(|o| {
            o.optimization.optimal_position_size_usd * o.optimization.net_profit_potential_bps
                / BPS_PER_UNIT
        })
        .sum();
    (allocated, expected_return / allocated * BPS_PER_UNIT)
}

pub fn execution_order(opportunity: &IntegratedOpportunity) -> ExecutionOrder {
    let raw = &opportunity.raw;
    let opt = &opportunity.optimization;
    ExecutionOrder {
        opportunity_id: opportunity.opportunity_id.clone(),
        timestamp: opportunity.timestamp,
        pair: raw.pair_label(),
        strategy: raw.strategy,
        position_details: PositionDetails {
            size_usd: opt.optimal_position_size_usd,
            leverage: opt.effective_leverage,
            expected_profit_bps: opt.net_profit_potential_bps,
            break_even_bps: opt.break_even_move_bps,
        },
        risk_management: RiskManagement {
            max_drawdown_pct: opportunity.max_drawdown_pct,
            time_horizon_min: opportunity.time_horizon_minutes,
            risk_score: raw.risk_score,
        },
        execution_params: ExecutionParams {
            priority: opportunity.execution_priority,
            profitability_score: opportunity.profitability_score,
            capital_efficiency: opt.capital_efficiency,
        },
        affinity_data: AffinityData {
            magnitude: raw.magnitude,
            arbitrage_potential: raw.arbitrage_potential,
            edge_latency: raw.combined_edge,
            directional_bias: raw.directional_bias,
        },
    }
}
