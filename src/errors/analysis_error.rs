//! Custom error types for the analysis pipeline

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("No commission structure configured for {symbol}")]
    MissingCommission { symbol: String },

    #[error("Unknown asset {symbol} referenced by pair {pair}")]
    UnknownAsset { symbol: String, pair: String },

    #[error("Allocation solver did not converge for {pair} after {iterations} iterations")]
    NonConvergence { pair: String, iterations: usize },

    #[error("Non-finite {quantity} computed for {pair}")]
    NumericalInstability {
        pair: String,
        quantity: &'static str,
    },
}

impl AnalysisError {
    /// Short stable label used as the error tally key.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::InvalidInput { .. } => "invalid_input",
            AnalysisError::MissingCommission { .. } => "missing_commission",
            AnalysisError::UnknownAsset { .. } => "unknown_asset",
            AnalysisError::NonConvergence { .. } => "non_convergence",
            AnalysisError::NumericalInstability { .. } => "numerical_instability",
        }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
