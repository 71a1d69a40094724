//! Affinity Alloc - pairwise affinity ranking and commission-aware capital allocation
//!
//! Models a static universe of crypto assets as particles exerting attraction and repulsion
//! on each other, ranks the strongest pairwise forces as trading candidates, sizes each one
//! with a bounded optimizer that charges commissions and funding, and emits a ranked,
//! serializable execution report.

pub mod config;
pub mod types;
pub mod errors;
pub mod registry;
pub mod affinity;
pub mod ranking;
pub mod optimizer;
pub mod scoring;
pub mod report;
pub mod validation;
pub mod analysis;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{ModelParams, SETTINGS, SYSTEM_VERSION, Settings};
pub use errors::{AnalysisError, AnalysisResult};
pub use registry::{CommissionTable, DEFAULT_COMMISSIONS, default_assets};
pub use types::*;
pub use analysis::{AnalysisOutcome, run_analysis, run_pipeline};
