//! Categorical lookups feeding the affinity formula

use crate::types::{AssetClass, VolumeTier};

/// Known class pairs; looked up in both orders.
const CLASS_CORRELATIONS: &[(AssetClass, AssetClass, f64)] = &[
    (AssetClass::StoreOfValue, AssetClass::SmartContract, 0.85),
    (AssetClass::StoreOfValue, AssetClass::Meme, 0.78),
    (AssetClass::SmartContract, AssetClass::HighThroughput, 0.72),
    (AssetClass::HighThroughput, AssetClass::ExchangeToken, 0.80),
    (AssetClass::ExchangeToken, AssetClass::ProofOfStake, 0.65),
];

pub fn class_correlation(a: AssetClass, b: AssetClass, default: f64) -> f64 {
    CLASS_CORRELATIONS
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, c)| *c)
        .unwrap_or(default)
}

/// Geometric mean of the two tiers' scores; highest when both trade heavily.
pub fn volume_correlation(a: VolumeTier, b: VolumeTier) -> f64 {
    (a.score() * b.score()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_lookup_is_symmetric() {
        let ab = class_correlation(AssetClass::StoreOfValue, AssetClass::Meme, 0.5);
        let ba = class_correlation(AssetClass::Meme, AssetClass::StoreOfValue, 0.5);
        assert_eq!(ab, 0.78);
        assert_eq!(ab, ba);
    }

    #[test]
    fn unlisted_pair_uses_default() {
        assert_eq!(
            class_correlation(AssetClass::Meme, AssetClass::ProofOfStake, 0.5),
            0.5
        );
    }

    #[test]
    fn volume_correlation_of_equal_tiers_is_the_tier_score() {
        assert!((volume_correlation(VolumeTier::High, VolumeTier::High) - 0.70).abs() < 1e-12);
        assert!((volume_correlation(VolumeTier::UltraHigh, VolumeTier::Medium) - 0.5f64.sqrt()).abs() < 1e-12);
    }
}
