//! Commission, gross profit and break-even arithmetic

use crate::{
    config::OptimizerParams,
    types::{CommissionImpact, CommissionStructure},
    utils::{BPS_PER_UNIT, to_bps},
};

/// Arbitrage potential assumed when sweeping commission impact.
pub const MODERATE_ARBITRAGE_POTENTIAL: f64 = 0.5;

/// Blended per-trade cost rate of trading both legs.
///
/// Higher arbitrage potential implies more frequent round trips, so the blended rate is
/// scaled by `1 + 2 * potential`.
pub fn effective_commission_rate(
    source: &CommissionStructure,
    target: &CommissionStructure,
    arbitrage_potential: f64,
    params: &OptimizerParams,
) -> f64 {
    let taker = (source.taker_fee + target.taker_fee) / 2.0;
    let slippage = (source.slippage_bps + target.slippage_bps) / 2.0 / BPS_PER_UNIT;
    let funding = (source.funding_rate + target.funding_rate) / 2.0 / params.funding_periods_per_year;
    let frequency_factor = 1.0 + 2.0 * arbitrage_potential;
    (taker + slippage + funding) * frequency_factor
}

pub fn gross_profit_bps(
    magnitude: f64,
    arbitrage_potential: f64,
    combined_edge: f64,
    params: &OptimizerParams,
) -> f64 {
    let magnitude_factor = (magnitude / params.gross_magnitude_scale).min(params.gross_magnitude_cap);
    let edge_factor = combined_edge / params.edge_normalizer * params.edge_sensitivity;
    let base_bps = arbitrage_potential * 100.0;
    (base_bps * magnitude_factor * edge_factor * params.profit_amplification)
        .clamp(0.0, params.gross_profit_cap_bps)
}

/// Smallest position whose net edge covers `min_net_profit_bps`, capped at half the capital.
pub fn break_even_position(
    gross_profit_bps: f64,
    commission_rate: f64,
    min_net_profit_bps: f64,
    available_capital: f64,
    params: &OptimizerParams,
) -> f64 {
    let commission_bps = to_bps(commission_rate);
    let net_profit_rate = (gross_profit_bps - commission_bps) / BPS_PER_UNIT;
    if net_profit_rate <= 0.0 {
        return available_capital * params.break_even_fallback_fraction;
    }

    let position = (min_net_profit_bps / BPS_PER_UNIT) / net_profit_rate;
    position.min(available_capital * params.break_even_cap_fraction)
}

/// Commission cost of a pair across position sizes at a moderate arbitrage potential.
pub fn analyze_commission_impact(
    source: &CommissionStructure,
    target: &CommissionStructure,
    position_sizes: &[f64],
    params: &OptimizerParams,
) -> Vec<CommissionImpact> {
    let rate = effective_commission_rate(source, target, MODERATE_ARBITRAGE_POTENTIAL, params);
    let largest = position_sizes
        .iter()
        .copied()
        .filter(|s| *s > 0.0)
        .fold(0.0, f64::max);

    position_sizes
        .iter()
        .copied()
        .filter(|size| *size > 0.0)
        .map(|size| {
            let commission_cost_usd = size * rate;
            let commission_bps = commission_cost_usd / size * BPS_PER_UNIT;
            CommissionImpact {
                position_size_usd: size,
                commission_cost_usd,
                commission_bps,
                break_even_move_bps: commission_bps,
                capital_efficiency: size / largest,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fees(taker: f64, funding: f64, slippage: f64) -> CommissionStructure {
        CommissionStructure::new(taker, taker, funding, slippage)
    }

    #[test]
    fn effective_rate_blends_both_legs() {
        let params = OptimizerParams::default();
        let rate = effective_commission_rate(&fees(0.001, 0.0, 2.0), &fees(0.002, 0.0, 4.0), 0.0, &params);
        assert!((rate - (0.0015 + 0.0003)).abs() < 1e-15);

        let amplified = effective_commission_rate(&fees(0.001, 0.0, 2.0), &fees(0.002, 0.0, 4.0), 0.5, &params);
        assert!((amplified - 2.0 * rate).abs() < 1e-15);
    }

    #[test]
    fn funding_is_spread_over_the_year() {
        let params = OptimizerParams::default();
        let rate = effective_commission_rate(&fees(0.0, 0.876, 0.0), &fees(0.0, 0.876, 0.0), 0.0, &params);
        assert!((rate - 0.0001).abs() < 1e-15);
    }

    #[test]
    fn gross_profit_is_capped() {
        let params = OptimizerParams::default();
        assert_eq!(gross_profit_bps(1.0e9, 1.0, 100.0, &params), 250.0);
        assert_eq!(gross_profit_bps(0.0, 0.5, 2.0, &params), 0.0);
    }

    #[test]
    fn break_even_falls_back_when_fees_dominate() {
        let params = OptimizerParams::default();
        let position = break_even_position(10.0, 0.002, 15.0, 10_000.0, &params);
        assert_eq!(position, 100.0);
    }

    #[test]
    fn break_even_is_capped_at_half_capital() {
        let params = OptimizerParams::default();
        // net edge of 0.01 bps needs an enormous position
        let position = break_even_position(20.001, 0.002, 15.0, 10_000.0, &params);
        assert_eq!(position, 5_000.0);

        let small = break_even_position(60.0, 0.002, 10.0, 10_000.0, &params);
        assert!((small - 0.25).abs() < 1e-9);
    }

    #[test]
    fn commission_impact_is_size_invariant_in_bps() {
        let params = OptimizerParams::default();
        let rows = analyze_commission_impact(
            &fees(0.001, 0.0001, 2.0),
            &fees(0.001, 0.0001, 2.5),
            &[1_000.0, 2_500.0, 5_000.0, 0.0],
            &params,
        );
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|w| (w[0].commission_bps - w[1].commission_bps).abs() < 1e-9));
        assert_eq!(rows[2].capital_efficiency, 1.0);
        assert!(rows.iter().all(|r| r.break_even_move_bps == r.commission_bps));
    }
}
