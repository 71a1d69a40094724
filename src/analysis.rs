//! End-to-end "run analysis" pipeline.
//!
//! registry -> affinity matrix -> ranking -> per-candidate allocation -> scoring -> report.
//! Every stage takes its inputs by reference and returns a fresh value, so concurrent runs
//! share nothing but the immutable default catalogs.

use tracing::{debug, info};
use crate::{
    affinity::{build_affinity_matrix, summarize_matrix},
    config::{ModelParams, RankingParams},
    errors::{AnalysisResult, ErrorTally},
    optimizer::AllocationOptimizer,
    ranking::rank_opportunities,
    registry::{CommissionTable, DEFAULT_COMMISSIONS, commission_for, default_assets},
    report::{ReportOptions, build_execution_report},
    scoring::integrate_opportunity,
    types::{AnalysisRequest, ExecutionReport, IntegratedOpportunity, MatrixSummary, RawOpportunity},
    validation::validate_request,
};

/// Everything a run produced, for hosts that want more than the report.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: ExecutionReport,
    pub matrix_summary: MatrixSummary,
    /// Every candidate that was allocated and scored, profitable or not.
    pub opportunities: Vec<IntegratedOpportunity>,
}

/// Runs the pipeline against the default commission table and model constants.
pub fn run_analysis(request: &AnalysisRequest) -> AnalysisResult<ExecutionReport> {
    run_pipeline(request, &DEFAULT_COMMISSIONS, &ModelParams::default()).map(|o| o.report)
}

pub fn run_pipeline(
    request: &AnalysisRequest,
    commissions: &CommissionTable,
    params: &ModelParams,
) -> AnalysisResult<AnalysisOutcome> {
    validate_request(request)?;

    let assets = request.assets.as_deref().unwrap_or_else(|| default_assets());
    let matrix = build_affinity_matrix(assets, &params.affinity);
    let matrix_summary = summarize_matrix(&matrix);
    info!(
        assets = assets.len(),
        edges = matrix_summary.total_forces,
        average_magnitude = matrix_summary.average_magnitude,
        "Affinity matrix computed"
    );

    let ranking_params = RankingParams {
        top_k: request.top_k,
        ..params.ranking.clone()
    };
    let ranking = rank_opportunities(&matrix, assets, &ranking_params);

    let mut tally = ErrorTally::new();
    for (pair, error) in &ranking.failures {
        tally.record(pair, error);
    }
    info!(
        candidates = ranking.opportunities.len(),
        skipped = ranking.failures.len(),
        "Candidates ranked"
    );

    let optimizer = AllocationOptimizer::new(
        &params.optimizer,
        request.available_capital,
        request.max_leverage,
        request.min_net_profit_bps,
    )?;

    let mut opportunities = Vec::with_capacity(ranking.opportunities.len());
    for raw in ranking.opportunities {
        let pair = raw.pair_label();
        match evaluate_candidate(raw, &optimizer, commissions, params, request, &mut tally) {
            Ok(integrated) => {
                debug!(
                    pair = %pair,
                    score = integrated.profitability_score,
                    priority = integrated.execution_priority,
                    profitable = integrated.is_profitable_after_fees,
                    "Candidate scored"
                );
                opportunities.push(integrated);
            }
            Err(e) => tally.record(&pair, &e),
        }
    }

    let options = ReportOptions {
        available_capital: request.available_capital,
        top_m: request.top_m,
        min_score: request.min_score,
        generated_at: request.as_of,
    };
    let pair_errors = tally.total();
    let report = build_execution_report(&opportunities, &options, tally.into_counts());
    info!(
        analyzed = report.system_metrics.total_opportunities_analyzed,
        profitable = report.system_metrics.profitable_opportunities_found,
        orders = report.total_orders,
        pair_errors,
        "Analysis complete"
    );

    Ok(AnalysisOutcome {
        report,
        matrix_summary,
        opportunities,
    })
}

fn evaluate_candidate(
    raw: RawOpportunity,
    optimizer: &AllocationOptimizer<'_>,
    commissions: &CommissionTable,
    params: &ModelParams,
    request: &AnalysisRequest,
    tally: &mut ErrorTally,
) -> AnalysisResult<IntegratedOpportunity> {
    let source_fees = commission_for(commissions, &raw.source)?;
    let target_fees = commission_for(commissions, &raw.target)?;
    let optimization = optimizer.optimize_with_tally(&raw, &source_fees, &target_fees, tally)?;
    Ok(integrate_opportunity(
        raw,
        optimization,
        &params.scoring,
        request.min_net_profit_bps,
        request.as_of,
    ))
}
