//! Run-level input validation

use crate::{
    errors::{AnalysisError, AnalysisResult},
    types::{AnalysisRequest, AssetProfile},
};

pub fn validate_capital(available_capital: f64) -> AnalysisResult<()> {
    if !(available_capital.is_finite() && available_capital > 0.0) {
        return Err(AnalysisError::InvalidInput {
            field: "available_capital",
            value: available_capital,
            reason: "must be a finite amount > 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_leverage(max_leverage: f64) -> AnalysisResult<()> {
    if !(max_leverage.is_finite() && max_leverage > 0.0) {
        return Err(AnalysisError::InvalidInput {
            field: "max_leverage",
            value: max_leverage,
            reason: "must be a finite multiple > 0".to_string(),
        });
    }
    Ok(())
}

/// Rejects a request before any computation starts.
pub fn validate_request(request: &AnalysisRequest) -> AnalysisResult<()> {
    validate_capital(request.available_capital)?;
    validate_max_leverage(request.max_leverage)?;
    if !request.min_net_profit_bps.is_finite() {
        return Err(AnalysisError::InvalidInput {
            field: "min_net_profit_bps",
            value: request.min_net_profit_bps,
            reason: "must be finite".to_string(),
        });
    }
    if !request.min_score.is_finite() {
        return Err(AnalysisError::InvalidInput {
            field: "min_score",
            value: request.min_score,
            reason: "must be finite".to_string(),
        });
    }
    if let Some(assets) = &request.assets {
        assets.iter().try_for_each(validate_asset)?;
    }
    Ok(())
}

pub fn validate_asset(asset: &AssetProfile) -> AnalysisResult<()> {
    let invalid = |field: &'static str, value: f64, reason: &str| AnalysisError::InvalidInput {
        field,
        value,
        reason: format!("{} for {}", reason, asset.symbol),
    };

    if !(asset.edge_latency.is_finite() && asset.edge_latency > 0.0) {
        return Err(invalid("edge_latency", asset.edge_latency, "must be > 0"));
    }
    if !(asset.mass.is_finite() && asset.mass > 0.0) {
        return Err(invalid("mass", asset.mass, "must be > 0"));
    }
    if !(0.0..=1.0).contains(&asset.coverage_ratio) {
        return Err(invalid("coverage_ratio", asset.coverage_ratio, "must be within [0, 1]"));
    }
    if !(0.0..=1.0).contains(&asset.liquidity_score) {
        return Err(invalid("liquidity_score", asset.liquidity_score, "must be within [0, 1]"));
    }
    if asset.leverage_range.0 > asset.leverage_range.1 {
        return Err(invalid(
            "leverage_range",
            asset.leverage_range.0 as f64,
            "minimum exceeds maximum",
        ));
    }
    Ok(())
}
