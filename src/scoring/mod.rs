//! Profitability scoring, prioritization and strategy parameters

pub mod profitability;
pub mod horizon;

pub use profitability::*;
pub use horizon::*;
