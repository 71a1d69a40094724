//! Default asset universe

use lazy_static::lazy_static;
use crate::types::{AssetClass, AssetProfile, VolumeTier};

lazy_static! {
    pub static ref DEFAULT_ASSETS: Vec<AssetProfile> = vec![
        profile("BTCUSDT", AssetClass::StoreOfValue, 2.5, (5, 15), VolumeTier::UltraHigh, 1000.0, 0.85, 0.95),
        profile("ETHUSDT", AssetClass::SmartContract, 2.1, (4, 12), VolumeTier::VeryHigh, 750.0, 0.82, 0.91),
        profile("SOLUSDT", AssetClass::HighThroughput, 1.8, (3, 10), VolumeTier::High, 400.0, 0.78, 0.85),
        profile("BNBUSDT", AssetClass::ExchangeToken, 1.6, (3, 8), VolumeTier::High, 350.0, 0.75, 0.82),
        profile("ADAUSDT", AssetClass::ProofOfStake, 1.4, (2, 7), VolumeTier::Medium, 200.0, 0.70, 0.75),
        profile("DOGEUSDT", AssetClass::Meme, 2.3, (4, 12), VolumeTier::VeryHigh, 600.0, 0.80, 0.88),
    ];
}

#[allow(clippy::too_many_arguments)]
fn profile(
    symbol: &str,
    class: AssetClass,
    edge_latency: f64,
    leverage_range: (u32, u32),
    volume_tier: VolumeTier,
    mass: f64,
    coverage_ratio: f64,
    liquidity_score: f64,
) -> AssetProfile {
    AssetProfile {
        symbol: symbol.to_string(),
        class,
        edge_latency,
        leverage_range,
        volume_tier,
        mass,
        coverage_ratio,
        liquidity_score,
    }
}

pub fn default_assets() -> &'static [AssetProfile] {
    &DEFAULT_ASSETS
}

pub fn find_asset<'a>(assets: &'a [AssetProfile], symbol: &str) -> Option<&'a AssetProfile> {
    assets.iter().find(|a| a.symbol == symbol)
}
