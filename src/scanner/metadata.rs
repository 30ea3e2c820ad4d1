use std::fs;
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::Utc;

/// Metadata captured from a single stat call against a regular file.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub size_bytes: u64,
    pub modified_time: String,
    pub accessed_time: String,
    pub created_time: String,
    pub owner_id: String,
    pub group_id: String,
    pub mode_bits: String,
}

/// Stat a regular file and return its metadata.
///
/// The path must already be classified as a regular, non-symlink file. The
/// call is a pure read; a stat failure (e.g. the file was removed between
/// classification and here) is a per-file failure for the caller to count.
pub fn capture_metadata(path: &Path) -> Result<FileMetadata> {
    let metadata = fs::symlink_metadata(path)
        .context(format!("Failed to stat {}", path.display()))?;

    let modified_time = metadata
        .modified()
        .map(system_time_to_rfc3339)
        .context(format!("No modification time for {}", path.display()))?;
    let accessed_time = metadata
        .accessed()
        .map(system_time_to_rfc3339)
        .context(format!("No access time for {}", path.display()))?;
    let created_time = change_time(&metadata, path)?;

    let (owner_id, group_id, mode_bits) = ownership_and_mode(&metadata);

    Ok(FileMetadata {
        size_bytes: metadata.len(),
        modified_time,
        accessed_time,
        created_time,
        owner_id,
        group_id,
        mode_bits,
    })
}

fn system_time_to_rfc3339(time: SystemTime) -> String {
    chrono::DateTime::<Utc>::from(time).to_rfc3339()
}

/// Third timestamp of the record.
///
/// Unix reports the inode change time (st_ctime) here, which is what the
/// platform actually exposes for this slot; platforms with a real birth
/// time report that instead.
#[cfg(unix)]
fn change_time(metadata: &fs::Metadata, path: &Path) -> Result<String> {
    use chrono::TimeZone;
    use std::os::unix::fs::MetadataExt;

    match Utc.timestamp_opt(metadata.ctime(), metadata.ctime_nsec() as u32) {
        chrono::LocalResult::Single(dt) => Ok(dt.to_rfc3339()),
        _ => anyhow::bail!("Invalid change time for {}", path.display()),
    }
}

#[cfg(not(unix))]
fn change_time(metadata: &fs::Metadata, path: &Path) -> Result<String> {
    metadata
        .created()
        .map(system_time_to_rfc3339)
        .context(format!("No creation time for {}", path.display()))
}

#[cfg(unix)]
fn ownership_and_mode(metadata: &fs::Metadata) -> (String, String, String) {
    use std::os::unix::fs::MetadataExt;

    (
        metadata.uid().to_string(),
        metadata.gid().to_string(),
        format!("{:o}", metadata.mode()),
    )
}

#[cfg(not(unix))]
fn ownership_and_mode(metadata: &fs::Metadata) -> (String, String, String) {
    let mode = if metadata.permissions().readonly() {
        "444"
    } else {
        "666"
    };
    ("0".to_string(), "0".to_string(), mode.to_string())
}
