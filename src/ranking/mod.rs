//! Candidate filtering, derivation and ranking

pub mod rules;
pub mod ranker;

pub use rules::*;
pub use ranker::*;
