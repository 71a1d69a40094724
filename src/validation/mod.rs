//! Validation of analysis inputs and output records

pub mod request;
pub mod records;

pub use request::*;
pub use records::*;
