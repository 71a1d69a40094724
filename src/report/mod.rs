//! Execution report assembly

pub mod builder;

pub use builder::*;
