//! Global constants for the rust-hasher application.
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make configuration changes easier.

// Memory and buffer size constants
/// Chunk size for streaming digest reads (16MB)
pub const HASH_BLOCK_SIZE: usize = 1 << 24;

// Progress reporting
/// Log a progress line every N entries during a scan
pub const PROGRESS_REPORT_INTERVAL: u64 = 10_000;

// Report file names
/// Aligned table report written next to the CSV output
pub const TABLE_REPORT_NAME: &str = "results.txt";

/// CSV report with one row per hashed file
pub const CSV_REPORT_NAME: &str = "results.csv";

/// Machine-readable JSON summary of the whole run
pub const JSON_SUMMARY_NAME: &str = "scan_summary.json";
