//! Report persistence

pub mod reports;

pub use reports::*;
