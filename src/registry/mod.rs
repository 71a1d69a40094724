//! Static asset and commission catalogs

pub mod assets;
pub mod commissions;

pub use assets::*;
pub use commissions::*;
