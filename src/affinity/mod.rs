//! Pairwise affinity matrix over the asset universe

pub mod correlation;
pub mod matrix;
pub mod summary;

pub use correlation::*;
pub use matrix::*;
pub use summary::*;
