//! Configuration management for the analysis host and the tunable model constants

pub mod settings;
pub mod params;

pub use settings::*;
pub use params::*;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref SETTINGS: Settings = Settings::load();
}
