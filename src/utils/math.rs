//! Mathematical utility functions

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Harmonic mean of two positive values; 0 when their sum is not positive.
pub fn harmonic_mean(a: f64, b: f64) -> f64 {
    if a + b <= 0.0 {
        return 0.0;
    }
    2.0 * a * b / (a + b)
}

pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub const BPS_PER_UNIT: f64 = 10_000.0;

pub fn to_bps(rate: f64) -> f64 {
    rate * BPS_PER_UNIT
}
