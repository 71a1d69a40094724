//! Core data types and structures

pub mod assets;
pub mod commission;
pub mod affinity;
pub mod opportunity;
pub mod optimization;
pub mod integrated;
pub mod report;
pub mod request;

pub use assets::*;
pub use commission::*;
pub use affinity::*;
pub use opportunity::*;
pub use optimization::*;
pub use integrated::*;
pub use report::*;
pub use request::*;
