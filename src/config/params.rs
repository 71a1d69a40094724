//! Tunable model constants.
//!
//! Every number the affinity, ranking, allocation and scoring stages depend on lives here with
//! its default. They are heuristics, not physical laws; callers may override any of them.

use std::f64::consts::{PI, SQRT_2};

const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;
const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;
/// 888 MHz field strength the force constant is tuned to.
const FIELD_STRENGTH_HZ: f64 = 888.0e6;

pub const DEFAULT_MAX_POSITION_RISK_PCT: f64 = 5.0;

/// Constants of the pairwise affinity formula.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityParams {
    /// Scales the raw arbitrage potential.
    pub amplification_factor: f64,
    pub coherence_threshold: f64,
    /// Gravitational-style constant K in `K * m_i * m_j / d^2`. The default (~0.65) saturates
    /// the magnitude multipliers downstream for every pair in the default universe.
    pub force_constant: f64,
    /// Lower bound on the latency distance.
    pub distance_floor: f64,
    /// Divisor applied to the mean-leverage difference before `tanh`.
    pub leverage_bias_scale: f64,
    pub default_correlation: f64,
}

impl Default for AffinityParams {
    fn default() -> Self {
        Self {
            amplification_factor: GOLDEN_RATIO * PI.sqrt(),
            coherence_threshold: 0.888,
            // G·√2 · 888e6·√φ, with the π² mass scaling and φ distance scaling folded in
            force_constant: GRAVITATIONAL_CONSTANT * SQRT_2 * FIELD_STRENGTH_HZ * GOLDEN_RATIO.sqrt()
                * PI
                * PI
                / GOLDEN_RATIO,
            distance_floor: 0.1,
            leverage_bias_scale: 10.0,
            default_correlation: 0.5,
        }
    }
}

/// Thresholds for filtering and deriving candidates from the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingParams {
    pub magnitude_threshold: f64,
    pub potential_threshold: f64,
    pub top_k: usize,
    pub leverage_cap: f64,
    /// Magnitude at which the leverage multiplier reaches 1.0.
    pub leverage_magnitude_scale: f64,
    pub leverage_magnitude_cap: f64,
    /// Magnitude that maps to a full unit of risk.
    pub risk_magnitude_scale: f64,
    pub profit_base_bps: f64,
    pub profit_magnitude_scale: f64,
    pub profit_magnitude_cap: f64,
    pub profit_ceiling_bps: f64,
    pub strategy_thresholds: StrategyThresholds,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            magnitude_threshold: 10.0,
            potential_threshold: 0.1,
            top_k: super::DEFAULT_TOP_K,
            leverage_cap: 25.0,
            leverage_magnitude_scale: 2_000.0,
            leverage_magnitude_cap: 2.0,
            risk_magnitude_scale: 10_000.0,
            profit_base_bps: 100.0,
            profit_magnitude_scale: 1_000.0,
            profit_magnitude_cap: 5.0,
            profit_ceiling_bps: 500.0,
            strategy_thresholds: StrategyThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyThresholds {
    pub bias: f64,
    pub potential: f64,
    pub correlation: f64,
    pub magnitude: f64,
}

impl Default for StrategyThresholds {
    fn default() -> Self {
        Self {
            bias: 0.3,
            potential: 0.7,
            correlation: 0.8,
            magnitude: 5_000.0,
        }
    }
}

/// Constants of the per-opportunity allocation problem.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerParams {
    pub max_position_risk_pct: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub initial_guess: f64,
    /// Fraction of capital used when the solver gives up.
    pub fallback_fraction: f64,
    pub max_iterations: usize,
    pub initial_step: f64,
    pub tolerance: f64,
    /// Funding accrual periods per year (hourly).
    pub funding_periods_per_year: f64,
    pub gross_profit_cap_bps: f64,
    pub gross_magnitude_scale: f64,
    pub gross_magnitude_cap: f64,
    /// Normalizer for the combined edge factor (ln 7919).
    pub edge_normalizer: f64,
    pub edge_sensitivity: f64,
    pub profit_amplification: f64,
    /// Fraction of capital used as break-even position when gross profit cannot cover fees.
    pub break_even_fallback_fraction: f64,
    pub break_even_cap_fraction: f64,
    pub leverage_penalty_knee: f64,
    pub size_penalty_knee: f64,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        Self {
            max_position_risk_pct: DEFAULT_MAX_POSITION_RISK_PCT,
            lower_bound: 0.001,
            upper_bound: 0.5,
            initial_guess: 0.05,
            fallback_fraction: 0.05,
            max_iterations: 200,
            initial_step: 0.01,
            tolerance: 1.0e-6,
            funding_periods_per_year: 365.0 * 24.0,
            gross_profit_cap_bps: 250.0,
            gross_magnitude_scale: 1_000.0,
            gross_magnitude_cap: 5.0,
            edge_normalizer: 7919f64.ln(),
            edge_sensitivity: 0.618,
            profit_amplification: GOLDEN_RATIO,
            break_even_fallback_fraction: 0.01,
            break_even_cap_fraction: 0.5,
            leverage_penalty_knee: 10.0,
            size_penalty_knee: 0.2,
        }
    }
}

impl OptimizerParams {
    pub fn max_position_fraction(&self) -> f64 {
        self.max_position_risk_pct / 100.0
    }
}

/// Weights and rule constants of the profitability scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub profit_points: f64,
    pub profit_scale_bps: f64,
    pub risk_points: f64,
    pub efficiency_points: f64,
    pub efficiency_scale: f64,
    pub affinity_points: f64,
    pub affinity_scale: f64,
    pub edge_points: f64,
    pub edge_scale: f64,
    pub priority_score_cap: u8,
    pub efficiency_bonus_threshold: f64,
    pub profit_bonus_threshold_bps: f64,
    pub drawdown_base_pct: f64,
    pub drawdown_leverage_scale: f64,
    pub drawdown_leverage_cap: f64,
    pub horizon: HorizonRules,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            profit_points: 3.0,
            profit_scale_bps: 50.0,
            risk_points: 2.0,
            efficiency_points: 2.0,
            efficiency_scale: 10.0,
            affinity_points: 2.0,
            affinity_scale: 1_000.0,
            edge_points: 1.0,
            edge_scale: 3.0,
            priority_score_cap: 8,
            efficiency_bonus_threshold: 0.10,
            profit_bonus_threshold_bps: 30.0,
            drawdown_base_pct: 3.0,
            drawdown_leverage_scale: 10.0,
            drawdown_leverage_cap: 2.0,
            horizon: HorizonRules::default(),
        }
    }
}

/// Condition of one time-horizon rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonCondition {
    LeverageAbove(f64),
    NetProfitAbove(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonRule {
    pub condition: HorizonCondition,
    pub minutes: u32,
}

/// Ordered rules, first match wins; `default_minutes` when none match.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonRules {
    pub rules: Vec<HorizonRule>,
    pub default_minutes: u32,
}

impl Default for HorizonRules {
    fn default() -> Self {
        Self {
            rules: vec![
                // aggressive positions exit faster
                HorizonRule {
                    condition: HorizonCondition::LeverageAbove(10.0),
                    minutes: 15,
                },
                HorizonRule {
                    condition: HorizonCondition::NetProfitAbove(25.0),
                    minutes: 30,
                },
            ],
            default_minutes: 45,
        }
    }
}

/// Bundle of every tunable used by a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelParams {
    pub affinity: AffinityParams,
    pub ranking: RankingParams,
    pub optimizer: OptimizerParams,
    pub scoring: ScoringWeights,
}
