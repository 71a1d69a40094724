//! Strategy selection as an ordered rule table

use crate::{
    config::StrategyThresholds,
    types::{AffinityForce, Strategy},
};

pub struct StrategyRule {
    pub strategy: Strategy,
    pub applies: fn(&AffinityForce, &StrategyThresholds) -> bool,
}

/// Evaluated top-down; the first matching rule wins.
pub const STRATEGY_RULES: &[StrategyRule] = &[
    StrategyRule {
        strategy: Strategy::CallSpreadAggressive,
        applies: |f, t| f.directional_bias > t.bias && f.arbitrage_potential > t.potential,
    },
    StrategyRule {
        strategy: Strategy::PutSpreadAggressive,
        applies: |f, t| f.directional_bias < -t.bias && f.arbitrage_potential > t.potential,
    },
    StrategyRule {
        strategy: Strategy::StraddleCorrelation,
        applies: |f, t| f.correlation_strength > t.correlation,
    },
    StrategyRule {
        strategy: Strategy::IronCondorVolatility,
        applies: |f, t| f.magnitude > t.magnitude,
    },
];

pub const FALLBACK_STRATEGY: Strategy = Strategy::ButterflyConservative;

pub fn select_strategy(force: &AffinityForce, thresholds: &StrategyThresholds) -> Strategy {
    STRATEGY_RULES
        .iter()
        .find(|rule| (rule.applies)(force, thresholds))
        .map(|rule| rule.strategy)
        .unwrap_or(FALLBACK_STRATEGY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn force(bias: f64, potential: f64, correlation: f64, magnitude: f64) -> AffinityForce {
        AffinityForce {
            source: "A".to_string(),
            target: "B".to_string(),
            magnitude,
            directional_bias: bias,
            correlation_strength: correlation,
            arbitrage_potential: potential,
        }
    }

    #[test]
    fn aggressive_rules_take_precedence_over_correlation() {
        let t = StrategyThresholds::default();
        assert_eq!(select_strategy(&force(0.5, 0.8, 0.9, 9_000.0), &t), Strategy::CallSpreadAggressive);
        assert_eq!(select_strategy(&force(-0.5, 0.8, 0.9, 9_000.0), &t), Strategy::PutSpreadAggressive);
    }

    #[test]
    fn correlation_beats_magnitude() {
        let t = StrategyThresholds::default();
        assert_eq!(select_strategy(&force(0.0, 0.2, 0.85, 9_000.0), &t), Strategy::StraddleCorrelation);
        assert_eq!(select_strategy(&force(0.0, 0.2, 0.78, 9_000.0), &t), Strategy::IronCondorVolatility);
    }

    #[test]
    fn thresholds_are_strict() {
        let t = StrategyThresholds::default();
        assert_eq!(select_strategy(&force(0.3, 0.9, 0.8, 5_000.0), &t), FALLBACK_STRATEGY);
    }
}
