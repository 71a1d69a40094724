//! Error recovery strategies for per-pair failures

use std::collections::BTreeMap;
use tracing::{Level, error, warn};
use super::AnalysisError;

#[derive(Debug, Clone, PartialEq)]
pub enum RecoveryAction {
    /// Drop the pair and continue the batch.
    Skip { log_level: Level },
    /// Recompute with the fixed fallback allocation.
    Fallback,
    /// Stop the whole run.
    Abort { reason: String },
}

pub fn classify_error(error: &AnalysisError) -> RecoveryAction {
    match error {
        AnalysisError::InvalidInput { .. } => RecoveryAction::Abort {
            reason: error.to_string(),
        },
        AnalysisError::NonConvergence { .. } => RecoveryAction::Fallback,
        AnalysisError::MissingCommission { .. } | AnalysisError::UnknownAsset { .. } => {
            RecoveryAction::Skip {
                log_level: Level::WARN,
            }
        }
        AnalysisError::NumericalInstability { .. } => RecoveryAction::Skip {
            log_level: Level::ERROR,
        },
    }
}

/// Run-level count of per-pair errors, keyed by error kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorTally {
    counts: BTreeMap<String, u32>,
}

impl ErrorTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs the error against its pair and counts it, recovered or not.
    pub fn record(&mut self, pair: &str, error: &AnalysisError) {
        match classify_error(error) {
            RecoveryAction::Skip { log_level } if log_level == Level::ERROR => {
                error!(pair, kind = error.kind(), "Pair excluded: {}", error);
            }
            RecoveryAction::Skip { .. } => {
                warn!(pair, kind = error.kind(), "Pair skipped: {}", error);
            }
            RecoveryAction::Fallback => {
                warn!(pair, kind = error.kind(), "{}; using fallback allocation", error);
            }
            RecoveryAction::Abort { reason } => {
                error!(pair, kind = error.kind(), "Unrecoverable error: {}", reason);
            }
        }
        *self.counts.entry(error.kind().to_string()).or_insert(0) += 1;
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn into_counts(self) -> BTreeMap<String, u32> {
        self.counts
    }
}
