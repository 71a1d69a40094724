//! Error types and per-pair recovery

pub mod analysis_error;
pub mod recovery;

pub use analysis_error::*;
pub use recovery::*;
