//! Default commission table

use lazy_static::lazy_static;
use std::collections::HashMap;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::types::CommissionStructure;

pub type CommissionTable = HashMap<String, CommissionStructure>;

lazy_static! {
    pub static ref DEFAULT_COMMISSIONS: CommissionTable = {
        let mut table = HashMap::new();
        table.insert("BTCUSDT".to_string(), CommissionStructure::new(0.0010, 0.0010, 0.0001, 2.0));
        table.insert("ETHUSDT".to_string(), CommissionStructure::new(0.0010, 0.0010, 0.0001, 2.5));
        table.insert("SOLUSDT".to_string(), CommissionStructure::new(0.0015, 0.0015, 0.0002, 3.0));
        // BNB fee discount
        table.insert("BNBUSDT".to_string(), CommissionStructure::new(0.0008, 0.0008, 0.0001, 2.0));
        table.insert("ADAUSDT".to_string(), CommissionStructure::new(0.0015, 0.0015, 0.0002, 4.0));
        table.insert("DOGEUSDT".to_string(), CommissionStructure::new(0.0015, 0.0015, 0.0003, 5.0));
        table
    };
}

pub fn commission_for(table: &CommissionTable, symbol: &str) -> AnalysisResult<CommissionStructure> {
    table
        .get(symbol)
        .copied()
        .ok_or_else(|| AnalysisError::MissingCommission {
            symbol: symbol.to_string(),
        })
}
