//! Execution report storage

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::types::ExecutionReport;

/// Writes the pretty-printed report and appends a compact copy to the day's JSONL log.
/// Returns the path of the standalone report file.
pub fn save_report(report: &ExecutionReport, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating report directory {}", output_dir.display()))?;

    let stamp = report.generation_timestamp;
    let report_path = output_dir.join(format!("report_{}.json", stamp.format("%Y-%m-%d_%H%M%S")));
    fs::write(&report_path, serde_json::to_string_pretty(report)?)
        .with_context(|| format!("writing {}", report_path.display()))?;

    let daily_path = output_dir.join(format!("reports_{}.jsonl", stamp.format("%Y-%m-%d")));
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&daily_path)
        .with_context(|| format!("opening {}", daily_path.display()))?;
    writeln!(file, "{}", serde_json::to_string(report)?)?;

    info!(
        path = %report_path.display(),
        orders = report.total_orders,
        capital_allocated = report.system_metrics.total_capital_allocated,
        "Saved execution report"
    );

    Ok(report_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SystemMetrics;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    #[test]
    fn writes_report_and_appends_daily_log() {
        let dir = std::env::temp_dir().join(format!("affinity-alloc-storage-{}", std::process::id()));
        let report = ExecutionReport {
            generation_timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 5).unwrap(),
            system_version: "test".to_string(),
            available_capital: 1_000.0,
            execution_orders: Vec::new(),
            system_metrics: SystemMetrics::default(),
            total_orders: 0,
            pair_errors: BTreeMap::new(),
        };

        let path = save_report(&report, &dir).unwrap();
        save_report(&report, &dir).unwrap();

        assert!(path.ends_with("report_2025-03-01_093005.json"));
        let daily = fs::read_to_string(dir.join("reports_2025-03-01.jsonl")).unwrap();
        assert_eq!(daily.lines().count(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
