use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a filesystem entry yielded by the walker.
///
/// Directories never appear here; they are traversal structure only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A plain file eligible for hashing
    RegularFile,
    /// A symbolic link; never followed, never hashed
    SymbolicLink,
    /// Sockets, FIFOs, devices, and anything else that is not a plain file
    Other,
}

/// Reason a visited entry did not produce a [`FileRecord`].
///
/// Every variant increments the run's error counter exactly once; the
/// distinction only matters for diagnostic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    SymbolicLink,
    NotRegularFile,
    OpenFailed,
    ReadFailed,
    MetadataFailed,
    TraversalFailed,
    Cancelled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::SymbolicLink => "skipped symbolic link",
            SkipReason::NotRegularFile => "skipped non-regular file",
            SkipReason::OpenFailed => "open failed",
            SkipReason::ReadFailed => "read failed",
            SkipReason::MetadataFailed => "metadata capture failed",
            SkipReason::TraversalFailed => "directory listing failed",
            SkipReason::Cancelled => "cancelled before processing",
        };
        write!(f, "{}", reason)
    }
}

/// One fully processed regular file.
///
/// A record exists only when classification, open, streaming read, and the
/// stat call all succeeded; there are no partially filled records.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileRecord {
    pub path: String,
    /// Uppercase hex digest; length is fixed by the selected algorithm
    pub digest: String,
    pub size_bytes: u64,
    /// RFC 3339 UTC timestamps as reported by the platform
    pub modified_time: String,
    pub accessed_time: String,
    pub created_time: String,
    /// String-rendered numeric ids; meaning is platform-dependent
    pub owner_id: String,
    pub group_id: String,
    /// Raw st_mode bits rendered in octal
    pub mode_bits: String,
}

/// Run-level counters, updated only by the scan engine.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of [`FileRecord`]s created
    pub processed_count: u64,
    /// Entries that failed classification, open, read, or stat
    pub error_count: u64,
    /// Sum of `size_bytes` over all records
    pub total_bytes_hashed: u64,
}

/// Final output of a scan: the ordered records plus the counters.
#[derive(Debug, Clone, Default)]
pub struct ScanResults {
    pub records: Vec<FileRecord>,
    pub summary: RunSummary,
}
