use anyhow::{Context, Result};
use serde_json::json;
use uuid::Uuid;

use crate::models::{FileRecord, RunSummary};
use crate::utils::hash::HashAlgorithm;

/// Create a JSON summary of a scan run.
///
/// The summary carries a unique scan id, the host it ran on, the selected
/// algorithm, every file record, and the run-level counters, so a baseline
/// can be archived or compared out of band.
pub fn create_scan_summary(
    hostname: &str,
    timestamp: &str,
    algorithm: HashAlgorithm,
    records: &[FileRecord],
    summary: &RunSummary,
    duration_seconds: f64,
) -> Result<String> {
    let file_list: Vec<_> = records
        .iter()
        .map(|record| {
            json!({
                "path": record.path,
                "digest": record.digest,
                "size_bytes": record.size_bytes,
                "modified_time": record.modified_time,
                "accessed_time": record.accessed_time,
                "created_time": record.created_time,
                "owner_id": record.owner_id,
                "group_id": record.group_id,
                "mode_bits": record.mode_bits,
            })
        })
        .collect();

    let report = json!({
        "scan_id": Uuid::new_v4().to_string(),
        "hostname": hostname,
        "scan_time": timestamp,
        "os": std::env::consts::OS,
        "tool_version": env!("CARGO_PKG_VERSION"),
        "algorithm": algorithm.to_string(),
        "files": file_list,
        "processed_count": summary.processed_count,
        "error_count": summary.error_count,
        "total_bytes_hashed": summary.total_bytes_hashed,
        "duration_seconds": duration_seconds,
    });

    serde_json::to_string_pretty(&report).context("Failed to serialize scan summary to JSON")
}
