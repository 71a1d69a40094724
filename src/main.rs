//! Affinity Alloc - host entry point
//!
//! Runs the analysis once, or on a fixed interval until Ctrl+C, and persists each report.

use affinity_alloc::*;
use anyhow::Result;
use chrono::Utc;
use std::time::Duration;
use tokio::time;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let settings = SETTINGS.clone();
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories(&settings.report_output_dir)?;

    info!("🧲 {} starting", SYSTEM_VERSION);
    info!("📋 Configuration:");
    info!("   Capital: ${:.2}", settings.available_capital_usd);
    info!("   Max leverage: {}x", settings.max_leverage);
    info!("   Candidates / orders: {} / {}", settings.top_k, settings.top_m);
    info!("   Min net profit: {} bps", settings.min_net_profit_bps);
    info!("   Min score: {}", settings.min_score);
    info!("   Max position risk: {}%", settings.max_position_risk_pct);

    let params = model_params(&settings);

    let Some(interval_secs) = settings.analysis_interval_secs else {
        return run_cycle(&settings, &params);
    };

    info!("🚀 Repeating analysis every {}s (Ctrl+C to stop)", interval_secs);
    let mut interval = time::interval(Duration::from_secs(interval_secs));
    let mut cycles: u64 = 0;
    let mut failures: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                cycles += 1;
                if let Err(e) = run_cycle(&settings, &params) {
                    failures += 1;
                    error!(cycle = cycles, "Analysis cycle failed: {:#}", e);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("📛 Received shutdown signal (Ctrl+C)...");
                break;
            }
        }
    }

    info!("🛑 Shutting down: {} cycles, {} failed", cycles, failures);
    Ok(())
}

fn model_params(settings: &Settings) -> ModelParams {
    let mut params = ModelParams::default();
    params.optimizer.max_position_risk_pct = settings.max_position_risk_pct;
    params
}

fn request_from(settings: &Settings) -> AnalysisRequest {
    let mut request = AnalysisRequest::new(settings.available_capital_usd, Utc::now())
        .with_max_leverage(settings.max_leverage);
    request.top_k = settings.top_k;
    request.top_m = settings.top_m;
    request.min_net_profit_bps = settings.min_net_profit_bps;
    request.min_score = settings.min_score;
    request
}

fn run_cycle(settings: &Settings, params: &ModelParams) -> Result<()> {
    let request = request_from(settings);
    let outcome = run_pipeline(&request, &DEFAULT_COMMISSIONS, params)?;

    utils::print_matrix_summary(&outcome.matrix_summary);
    utils::print_report_summary(&outcome.report);

    if settings.save_reports {
        storage::save_report(&outcome.report, &settings.report_output_dir)?;
    }
    Ok(())
}
