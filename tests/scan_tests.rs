//! Integration tests for end-to-end scan scenarios.
//!
//! These tests exercise the full traversal-and-digest path the way the
//! binary drives it: walk a fixture tree, hash every regular file, and
//! check the run-level counters.

use std::fs;

use anyhow::Result;
use tempfile::TempDir;

use rust_hasher::models::RunSummary;
use rust_hasher::scanner::{ScanEngine, ScanOptions};
use rust_hasher::utils::hash::HashAlgorithm;

fn run_scan(root: &std::path::Path, algorithm: HashAlgorithm) -> Result<rust_hasher::models::ScanResults> {
    let engine = ScanEngine::new(ScanOptions {
        algorithm,
        threads: 1,
    });
    engine.scan(root)
}

/// Scenario: one file with known content produces the reference MD5 vector.
#[test]
fn test_single_file_reference_vector() -> Result<()> {
    let root = TempDir::new()?;
    fs::write(root.path().join("a.txt"), "hello")?;

    let results = run_scan(root.path(), HashAlgorithm::Md5)?;

    assert_eq!(results.summary.processed_count, 1);
    assert_eq!(results.summary.error_count, 0);
    assert_eq!(results.summary.total_bytes_hashed, 5);
    assert_eq!(results.records[0].digest, "5D41402ABC4B2A76B9719D911017C592");
    assert_eq!(results.records[0].size_bytes, 5);

    Ok(())
}

/// Scenario: a symlink to a valid file is skipped, and its target is hashed
/// exactly once through the real path.
#[cfg(unix)]
#[test]
fn test_symlink_is_skipped_target_visited_once() -> Result<()> {
    let root = TempDir::new()?;
    let target = root.path().join("a.txt");
    fs::write(&target, "hello")?;
    std::os::unix::fs::symlink(&target, root.path().join("link"))?;

    let results = run_scan(root.path(), HashAlgorithm::Sha256)?;

    assert_eq!(results.summary.processed_count, 1);
    assert_eq!(results.summary.error_count, 1);
    assert_eq!(results.records.len(), 1);
    assert_eq!(results.records[0].path, target.to_string_lossy());

    Ok(())
}

/// Scenario: subdirectories are descended into but never recorded or
/// error-counted themselves.
#[test]
fn test_subdirectory_descent() -> Result<()> {
    let root = TempDir::new()?;
    let sub = root.path().join("sub");
    fs::create_dir(&sub)?;
    fs::write(sub.join("b.txt"), "nested")?;

    let results = run_scan(root.path(), HashAlgorithm::Sha1)?;

    assert_eq!(results.summary.processed_count, 1);
    assert_eq!(results.summary.error_count, 0);
    assert_eq!(results.records[0].path, sub.join("b.txt").to_string_lossy());

    Ok(())
}

/// Scenario: an unreadable file is an error, and the remaining files are
/// still processed.
#[cfg(unix)]
#[test]
fn test_unreadable_file_does_not_abort_run() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let root = TempDir::new()?;
    fs::write(root.path().join("first.txt"), "first")?;
    let locked = root.path().join("locked.txt");
    fs::write(&locked, "secret")?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;
    fs::write(root.path().join("last.txt"), "last")?;

    // Privileged environments can open the file anyway
    if fs::File::open(&locked).is_ok() {
        return Ok(());
    }

    let results = run_scan(root.path(), HashAlgorithm::Md5)?;

    assert_eq!(results.summary.processed_count, 2);
    assert_eq!(results.summary.error_count, 1);
    assert!(!results.records.iter().any(|r| r.path.ends_with("locked.txt")));

    Ok(())
}

/// Scenario: an empty root yields an empty store and zeroed counters.
#[test]
fn test_empty_root() -> Result<()> {
    let root = TempDir::new()?;

    let results = run_scan(root.path(), HashAlgorithm::Sha512)?;

    assert!(results.records.is_empty());
    assert_eq!(results.summary, RunSummary::default());

    Ok(())
}

/// Every supported algorithm produces a digest of its fixed hex length.
#[test]
fn test_digest_lengths_per_algorithm() -> Result<()> {
    let root = TempDir::new()?;
    fs::write(root.path().join("a.bin"), [0u8; 256])?;

    for algorithm in [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512,
    ] {
        let results = run_scan(root.path(), algorithm)?;
        assert_eq!(results.records[0].digest.len(), algorithm.hex_len());
    }

    Ok(())
}

/// Repeated runs over unchanged content produce identical digests.
#[test]
fn test_repeated_runs_are_deterministic() -> Result<()> {
    let root = TempDir::new()?;
    fs::write(root.path().join("a.txt"), "stable")?;
    fs::write(root.path().join("b.txt"), "content")?;

    let first = run_scan(root.path(), HashAlgorithm::Sha256)?;
    let second = run_scan(root.path(), HashAlgorithm::Sha256)?;

    let digests = |results: &rust_hasher::models::ScanResults| {
        let mut pairs: Vec<_> = results
            .records
            .iter()
            .map(|r| (r.path.clone(), r.digest.clone()))
            .collect();
        pairs.sort();
        pairs
    };

    assert_eq!(digests(&first), digests(&second));
    Ok(())
}

/// A wider fixture tree upholds the conservation and sum invariants in both
/// scheduling modes.
#[test]
fn test_invariants_hold_sequential_and_parallel() -> Result<()> {
    let root = TempDir::new()?;
    for i in 0..10 {
        fs::write(root.path().join(format!("f{}.bin", i)), vec![0xAB; i * 10])?;
    }
    let sub = root.path().join("deeper");
    fs::create_dir(&sub)?;
    fs::write(sub.join("g.bin"), b"geometry")?;

    for threads in [1, 4] {
        let engine = ScanEngine::new(ScanOptions {
            algorithm: HashAlgorithm::Sha256,
            threads,
        });
        let results = engine.scan(root.path())?;

        assert_eq!(
            results.summary.processed_count + results.summary.error_count,
            11
        );
        let sum: u64 = results.records.iter().map(|r| r.size_bytes).sum();
        assert_eq!(results.summary.total_bytes_hashed, sum);
    }

    Ok(())
}
