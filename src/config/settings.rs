//! Host settings and environment variable handling

use std::env;
use std::path::PathBuf;

// Request defaults
pub const DEFAULT_AVAILABLE_CAPITAL_USD: f64 = 10_000.0;
pub const DEFAULT_MAX_LEVERAGE: f64 = 15.0;
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_TOP_M: usize = 5;
pub const DEFAULT_MIN_NET_PROFIT_BPS: f64 = 15.0;
pub const DEFAULT_MIN_SCORE: f64 = 6.0;

// Bounds applied when reading the environment
pub const MIN_AVAILABLE_CAPITAL_USD: f64 = 1.0;
pub const MAX_LEVERAGE_CEILING: f64 = 125.0;
pub const MAX_TOP_K: usize = 100;
pub const MIN_ANALYSIS_INTERVAL_SECS: u64 = 1;

pub const SYSTEM_VERSION: &str = concat!("AFFINITY_ALLOC_v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Settings {
    pub available_capital_usd: f64,
    pub max_leverage: f64,
    pub top_k: usize,
    pub top_m: usize,
    pub min_net_profit_bps: f64,
    pub min_score: f64,
    pub max_position_risk_pct: f64,
    // Host behaviour
    pub analysis_interval_secs: Option<u64>,
    pub report_output_dir: PathBuf,
    pub save_reports: bool,
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl Settings {
    pub fn load() -> Self {
        Self {
            available_capital_usd: parse_env("AVAILABLE_CAPITAL_USD")
                .unwrap_or(DEFAULT_AVAILABLE_CAPITAL_USD)
                .max(MIN_AVAILABLE_CAPITAL_USD),
            max_leverage: parse_env("MAX_LEVERAGE")
                .unwrap_or(DEFAULT_MAX_LEVERAGE)
                .clamp(1.0, MAX_LEVERAGE_CEILING),
            top_k: parse_env("TOP_K_CANDIDATES")
                .unwrap_or(DEFAULT_TOP_K)
                .clamp(1, MAX_TOP_K),
            top_m: parse_env("TOP_M_ORDERS")
                .unwrap_or(DEFAULT_TOP_M)
                .clamp(1, MAX_TOP_K),
            min_net_profit_bps: parse_env("MIN_NET_PROFIT_BPS")
                .unwrap_or(DEFAULT_MIN_NET_PROFIT_BPS)
                .max(0.0),
            min_score: parse_env("MIN_PROFITABILITY_SCORE")
                .unwrap_or(DEFAULT_MIN_SCORE)
                .clamp(0.0, 10.0),
            max_position_risk_pct: parse_env("MAX_POSITION_RISK_PCT")
                .unwrap_or(super::DEFAULT_MAX_POSITION_RISK_PCT)
                .clamp(0.1, 50.0),
            analysis_interval_secs: parse_env::<u64>("ANALYSIS_INTERVAL_SECS")
                .map(|secs| secs.max(MIN_ANALYSIS_INTERVAL_SECS)),
            report_output_dir: env::var("REPORT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output/reports")),
            save_reports: env::var("SAVE_REPORTS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }
}
