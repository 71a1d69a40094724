//! Commission-aware capital allocation

pub mod commission;
pub mod solver;
pub mod allocation;

pub use commission::*;
pub use solver::*;
pub use allocation::*;
