//! Console summaries of a finished analysis

use std::collections::BTreeMap;
use tracing::{info, warn};
use crate::types::{ExecutionOrder, ExecutionReport, MatrixSummary};

pub fn print_matrix_summary(summary: &MatrixSummary) {
    info!(
        "🧲 Affinity matrix: {} forces, average magnitude {:.2}",
        summary.total_forces, summary.average_magnitude
    );
    for source in &summary.sources {
        info!(
            "   {} | attraction: {} | repulsion: {} | arbitrage: {}",
            source.source,
            source.strongest_attraction,
            source.strongest_repulsion,
            source.best_arbitrage_target,
        );
    }
}

pub fn print_execution_order(rank: usize, order: &ExecutionOrder) {
    info!(
        "#{} {} [{}] size ${:.2} @ {:.2}x | net {:.2} bps | score {:.1} | priority {} | horizon {}m",
        rank,
        order.pair,
        order.strategy,
        order.position_details.size_usd,
        order.position_details.leverage,
        order.position_details.expected_profit_bps,
        order.execution_params.profitability_score,
        order.execution_params.priority,
        order.risk_management.time_horizon_min,
    );
}

pub fn print_report_summary(report: &ExecutionReport) {
    let metrics = &report.system_metrics;
    info!("📊 Execution report ({})", report.system_version);
    info!("   Capital available: ${:.2}", report.available_capital);
    info!("   Candidates analyzed: {}", metrics.total_opportunities_analyzed);
    info!("   Profitable after fees: {}", metrics.profitable_opportunities_found);
    info!("   Average score: {:.2}", metrics.average_profitability_score);
    info!("   Capital allocated: ${:.2}", metrics.total_capital_allocated);
    info!("   Expected return: {:.1} bps", metrics.expected_total_return_bps);

    if report.execution_orders.is_empty() {
        warn!("No opportunities met the profitability criteria");
    }
    for (i, order) in report.execution_orders.iter().enumerate() {
        print_execution_order(i + 1, order);
    }
    print_pair_errors(&report.pair_errors);
}

fn print_pair_errors(pair_errors: &BTreeMap<String, u32>) {
    if pair_errors.is_empty() {
        return;
    }
    let total: u32 = pair_errors.values().sum();
    warn!("   Pairs skipped: {} {:?}", total, pair_errors);
}
