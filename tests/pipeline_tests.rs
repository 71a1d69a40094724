//! End-to-end tests of the "run analysis" pipeline over the default registry.

use affinity_alloc::affinity::pairwise_force;
use affinity_alloc::config::{AffinityParams, ModelParams, OptimizerParams, RankingParams};
use affinity_alloc::optimizer::AllocationOptimizer;
use affinity_alloc::ranking::derive_opportunity;
use affinity_alloc::registry::commission_for;
use affinity_alloc::validation::{within_position_cap, within_record_bounds};
use affinity_alloc::*;
use chrono::{DateTime, TimeZone, Utc};

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap()
}

fn zero_fee_table() -> CommissionTable {
    default_assets()
        .iter()
        .map(|a| (a.symbol.clone(), CommissionStructure::new(0.0, 0.0, 0.0, 0.0)))
        .collect()
}

fn flat_fee_table(taker_fee: f64) -> CommissionTable {
    default_assets()
        .iter()
        .map(|a| (a.symbol.clone(), CommissionStructure::new(taker_fee, taker_fee, 0.0, 0.0)))
        .collect()
}

fn asset(symbol: &str, class: AssetClass, latency: f64, range: (u32, u32), tier: VolumeTier, mass: f64) -> AssetProfile {
    AssetProfile {
        symbol: symbol.to_string(),
        class,
        edge_latency: latency,
        leverage_range: range,
        volume_tier: tier,
        mass,
        coverage_ratio: 0.85,
        liquidity_score: 0.95,
    }
}

/// A (mass 1000, latency 2.5, 5-15x) against B (mass 750, latency 2.1, 4-12x).
#[test]
fn two_asset_scenario_stays_inside_position_and_leverage_bounds() {
    let a = asset("BTCUSDT", AssetClass::StoreOfValue, 2.5, (5, 15), VolumeTier::UltraHigh, 1000.0);
    let mut b = asset("ETHUSDT", AssetClass::SmartContract, 2.1, (4, 12), VolumeTier::VeryHigh, 750.0);
    b.coverage_ratio = 0.82;
    b.liquidity_score = 0.91;
    let assets = vec![a.clone(), b.clone()];

    let optimizer_params = OptimizerParams::default();
    let optimizer = AllocationOptimizer::new(&optimizer_params, 10_000.0, 15.0, 15.0).unwrap();

    for (source, target) in [(&a, &b), (&b, &a)] {
        let force = pairwise_force(source, target, &AffinityParams::default());
        let raw = derive_opportunity(&force, &assets, &RankingParams::default()).unwrap();
        let src_fees = commission_for(&DEFAULT_COMMISSIONS, &raw.source).unwrap();
        let tgt_fees = commission_for(&DEFAULT_COMMISSIONS, &raw.target).unwrap();

        let inputs = optimizer.inputs(&raw, &src_fees, &tgt_fees);
        let result = optimizer.optimize(&raw, &src_fees, &tgt_fees).unwrap();

        assert!((100.0..=5_000.0).contains(&result.optimal_position_size_usd));
        assert!((1.0..=15.0).contains(&result.effective_leverage));
        if inputs.gross_profit_bps > inputs.commission_rate * 10_000.0 {
            assert!(result.net_profit_potential_bps >= 0.0);
        } else {
            assert_eq!(inputs.break_even_position, 100.0);
            assert_eq!(result.optimal_position_size_usd, 100.0);
            assert!(result.used_fallback);
        }
    }
}

#[test]
fn default_universe_and_fees_produce_orders() {
    let request = AnalysisRequest::new(10_000.0, as_of());
    let report = run_analysis(&request).unwrap();

    assert!(!report.execution_orders.is_empty());
    for order in &report.execution_orders {
        assert!(order.position_details.expected_profit_bps >= request.min_net_profit_bps);
        assert!(order.execution_params.profitability_score >= request.min_score);
        assert!(order.position_details.leverage > 1.0);
    }
    assert!(report
        .execution_orders
        .iter()
        .any(|o| o.pair == "BTCUSDT/BNBUSDT" || o.pair == "BNBUSDT/BTCUSDT"));
}

#[test]
fn default_candidates_carry_amplified_leverage() {
    let params = ModelParams::default();
    let request = AnalysisRequest::new(10_000.0, as_of());
    let outcome = run_pipeline(&request, &DEFAULT_COMMISSIONS, &params).unwrap();

    assert!(!outcome.opportunities.is_empty());
    for record in &outcome.opportunities {
        let profile = |symbol: &str| default_assets().iter().find(|a| a.symbol == symbol).unwrap();
        let base = (profile(&record.raw.source).mean_leverage() + profile(&record.raw.target).mean_leverage()) / 2.0;
        assert!(record.raw.heuristic_leverage >= base.min(params.ranking.leverage_cap));
    }
}

#[test]
fn fees_above_every_gross_edge_yield_no_orders() {
    // 5% taker fee alone exceeds the gross profit ceiling
    let request = AnalysisRequest::new(10_000.0, as_of());
    let outcome = run_pipeline(&request, &flat_fee_table(0.05), &ModelParams::default()).unwrap();

    assert!(!outcome.opportunities.is_empty());
    assert!(outcome.opportunities.iter().all(|o| !o.is_profitable_after_fees));
    assert!(outcome.report.execution_orders.is_empty());
    assert_eq!(outcome.report.total_orders, 0);
    assert_eq!(outcome.report.system_metrics.profitable_opportunities_found, 0);
    assert_eq!(outcome.report.system_metrics.average_profitability_score, 0.0);
    assert_eq!(outcome.report.system_metrics.total_capital_allocated, 0.0);
}

#[test]
fn orders_are_profitable_sorted_and_capped() {
    let mut request = AnalysisRequest::new(10_000.0, as_of());
    request.min_score = 0.0;
    request.min_net_profit_bps = 0.0;
    request.top_m = 3;
    let outcome = run_pipeline(&request, &zero_fee_table(), &ModelParams::default()).unwrap();
    let report = &outcome.report;

    assert!(!report.execution_orders.is_empty());
    assert!(report.execution_orders.len() <= 3);
    assert_eq!(report.total_orders, report.execution_orders.len());

    for order in &report.execution_orders {
        let source = outcome
            .opportunities
            .iter()
            .find(|o| o.opportunity_id == order.opportunity_id)
            .expect("order traces back to a scored opportunity");
        assert!(source.is_profitable_after_fees);
    }
    for pair in report.execution_orders.windows(2) {
        assert!(
            pair[0].execution_params.profitability_score >= pair[1].execution_params.profitability_score
        );
    }

    let allocated: f64 = report
        .execution_orders
        .iter()
        .map(|o| o.position_details.size_usd)
        .sum();
    assert!((report.system_metrics.total_capital_allocated - allocated).abs() < 1e-9);
    assert!(allocated <= request.available_capital);
}

#[test]
fn unprofitable_records_never_become_orders() {
    let request = AnalysisRequest::new(25_000.0, as_of());
    let outcome = run_analysis_outcome(&request);

    let profitable: Vec<&str> = outcome
        .opportunities
        .iter()
        .filter(|o| o.is_profitable_after_fees)
        .map(|o| o.opportunity_id.as_str())
        .collect();
    assert!(outcome
        .report
        .execution_orders
        .iter()
        .all(|order| profitable.contains(&order.opportunity_id.as_str())));
}

#[test]
fn every_record_respects_caps_and_bounds() {
    let request = AnalysisRequest::new(50_000.0, as_of()).with_max_leverage(8.0);
    let params = ModelParams::default();
    let outcome = run_pipeline(&request, &zero_fee_table(), &params).unwrap();

    assert!(!outcome.opportunities.is_empty());
    for record in &outcome.opportunities {
        assert!(within_position_cap(
            &record.optimization,
            request.available_capital,
            params.optimizer.max_position_risk_pct,
        ));
        assert!(within_record_bounds(record));
        assert!(record.optimization.effective_leverage <= 8.0);
        assert_eq!(record.timestamp, as_of());
    }
}

#[test]
fn identical_requests_produce_identical_json() {
    let request = AnalysisRequest::new(10_000.0, as_of());
    let first = serde_json::to_string(&run_analysis(&request).unwrap()).unwrap();
    let second = serde_json::to_string(&run_analysis(&request).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn report_json_uses_documented_field_names() {
    let mut request = AnalysisRequest::new(10_000.0, as_of());
    request.min_score = 0.0;
    request.min_net_profit_bps = 0.0;
    let report = run_pipeline(&request, &zero_fee_table(), &ModelParams::default())
        .unwrap()
        .report;
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["system_version"], SYSTEM_VERSION);
    assert!(json["system_metrics"]["total_opportunities_analyzed"].is_u64());
    let order = &json["execution_orders"][0];
    for key in [
        "opportunity_id",
        "timestamp",
        "pair",
        "strategy",
        "position_details",
        "risk_management",
        "execution_params",
        "affinity_data",
    ] {
        assert!(order.get(key).is_some(), "missing {key}");
    }
    assert!(order["pair"].as_str().unwrap().contains('/'));
}

#[test]
fn invalid_leverage_fails_the_whole_run() {
    for leverage in [0.0, -3.0, f64::NAN] {
        let request = AnalysisRequest::new(10_000.0, as_of()).with_max_leverage(leverage);
        assert!(matches!(
            run_analysis(&request),
            Err(AnalysisError::InvalidInput { field: "max_leverage", .. })
        ));
    }
}

#[test]
fn unknown_commission_symbol_is_tallied_not_fatal() {
    let mut table = zero_fee_table();
    table.remove("DOGEUSDT");
    let mut request = AnalysisRequest::new(10_000.0, as_of());
    request.top_k = 30;
    let outcome = run_pipeline(&request, &table, &ModelParams::default()).unwrap();

    let skipped = outcome.report.pair_errors.get("missing_commission").copied().unwrap_or(0);
    let touched_doge = outcome
        .opportunities
        .iter()
        .any(|o| o.raw.source == "DOGEUSDT" || o.raw.target == "DOGEUSDT");
    assert!(!touched_doge);
    assert!(skipped > 0);
    assert!(!outcome.opportunities.is_empty());
}

fn run_analysis_outcome(request: &AnalysisRequest) -> AnalysisOutcome {
    run_pipeline(request, &DEFAULT_COMMISSIONS, &ModelParams::default()).unwrap()
}
