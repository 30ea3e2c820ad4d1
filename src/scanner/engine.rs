use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::constants::PROGRESS_REPORT_INTERVAL;
use crate::models::{EntryKind, FileRecord, RunSummary, ScanResults, SkipReason};
use crate::scanner::metadata::capture_metadata;
use crate::scanner::walker::{DirectoryWalker, ScanEntry};
use crate::utils::hash::{hash_reader, HashAlgorithm};

/// Run-wide configuration for a scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Digest algorithm applied to every file in the run
    pub algorithm: HashAlgorithm,
    /// Worker threads; 1 processes files strictly one at a time
    pub threads: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            algorithm: HashAlgorithm::Md5,
            threads: 1,
        }
    }
}

/// Terminal outcome for one visited entry.
enum Outcome {
    Recorded(FileRecord),
    Failed(SkipReason),
}

/// The traversal-and-digest engine.
///
/// Drives the walker over a subtree, streams each regular file through the
/// configured digest, captures its metadata, and commits either a complete
/// [`FileRecord`] or an error count for every visited entry. Per-file
/// failures never abort the run.
pub struct ScanEngine {
    options: ScanOptions,
    cancelled: Arc<AtomicBool>,
}

impl ScanEngine {
    pub fn new(options: ScanOptions) -> Self {
        ScanEngine {
            options,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for requesting cancellation from another thread.
    ///
    /// Once set, no new file is dispatched. Entries already pulled from the
    /// enumerator are counted as errors rather than silently dropped.
    pub fn cancel_token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Scan the subtree rooted at `root`.
    ///
    /// The root must be an existing, readable directory; callers validate
    /// it before handing it to the engine.
    pub fn scan(&self, root: &Path) -> Result<ScanResults> {
        info!(
            "Scanning {} with {} ({} thread(s))",
            root.display(),
            self.options.algorithm,
            self.options.threads
        );

        let walker = DirectoryWalker::new(root);
        let results = if self.options.threads > 1 {
            self.scan_parallel(&walker)?
        } else {
            self.scan_sequential(&walker)
        };

        info!(
            "Scan complete: {} processed, {} errors, {} bytes hashed",
            results.summary.processed_count,
            results.summary.error_count,
            results.summary.total_bytes_hashed
        );
        Ok(results)
    }

    /// Sequential path: one file fully processed before the next begins.
    ///
    /// Records keep the walk order.
    fn scan_sequential(&self, walker: &DirectoryWalker) -> ScanResults {
        let mut results = ScanResults::default();

        for item in walker.entries() {
            if self.cancelled.load(Ordering::SeqCst) {
                info!("Scan cancelled; stopping at the next entry boundary");
                break;
            }

            match item {
                Ok(entry) => match self.process_entry(&entry) {
                    Outcome::Recorded(record) => {
                        results.summary.processed_count += 1;
                        results.summary.total_bytes_hashed += record.size_bytes;
                        results.records.push(record);
                    }
                    Outcome::Failed(_) => results.summary.error_count += 1,
                },
                Err(err) => {
                    warn!("{}: {}", SkipReason::TraversalFailed, err);
                    results.summary.error_count += 1;
                }
            }

            let visited = results.summary.processed_count + results.summary.error_count;
            if visited % PROGRESS_REPORT_INTERVAL == 0 {
                info!("Visited {} entries", visited);
            }
        }

        results
    }

    /// Worker-pool path: entries are pulled from the lazy enumerator and
    /// processed concurrently.
    ///
    /// Counter updates are atomic and record appends go through a mutex, so
    /// no partial record is ever observable. Records are sorted by path
    /// because insertion order is non-deterministic here.
    fn scan_parallel(&self, walker: &DirectoryWalker) -> Result<ScanResults> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.threads)
            .build()
            .context("Failed to build scan thread pool")?;

        let records = Mutex::new(Vec::new());
        let processed = AtomicU64::new(0);
        let errors = AtomicU64::new(0);
        let bytes = AtomicU64::new(0);

        pool.install(|| {
            walker.entries().par_bridge().for_each(|item| {
                if self.cancelled.load(Ordering::SeqCst) {
                    debug!("{}: entry pulled after cancellation", SkipReason::Cancelled);
                    errors.fetch_add(1, Ordering::SeqCst);
                    return;
                }

                match item {
                    Ok(entry) => match self.process_entry(&entry) {
                        Outcome::Recorded(record) => {
                            processed.fetch_add(1, Ordering::SeqCst);
                            bytes.fetch_add(record.size_bytes, Ordering::SeqCst);
                            records.lock().unwrap().push(record);
                        }
                        Outcome::Failed(_) => {
                            errors.fetch_add(1, Ordering::SeqCst);
                        }
                    },
                    Err(err) => {
                        warn!("{}: {}", SkipReason::TraversalFailed, err);
                        errors.fetch_add(1, Ordering::SeqCst);
                    }
                }
            });
        });

        let mut records = records.into_inner().unwrap();
        records.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(ScanResults {
            records,
            summary: RunSummary {
                processed_count: processed.into_inner(),
                error_count: errors.into_inner(),
                total_bytes_hashed: bytes.into_inner(),
            },
        })
    }

    /// Process one classified entry to its terminal state.
    ///
    /// Classification is rejected before any descriptor is opened; the
    /// record is committed only after digest and metadata both succeeded.
    fn process_entry(&self, entry: &ScanEntry) -> Outcome {
        match entry.kind {
            EntryKind::SymbolicLink => {
                warn!("{}: {}", entry.path.display(), SkipReason::SymbolicLink);
                return Outcome::Failed(SkipReason::SymbolicLink);
            }
            EntryKind::Other => {
                warn!("{}: {}", entry.path.display(), SkipReason::NotRegularFile);
                return Outcome::Failed(SkipReason::NotRegularFile);
            }
            EntryKind::RegularFile => {}
        }

        let file = match File::open(&entry.path) {
            Ok(file) => file,
            Err(err) => {
                warn!("{}: {}: {}", entry.path.display(), SkipReason::OpenFailed, err);
                return Outcome::Failed(SkipReason::OpenFailed);
            }
        };

        let digest = match hash_reader(file, self.options.algorithm) {
            Ok(digest) => digest,
            Err(err) => {
                warn!("{}: {}: {}", entry.path.display(), SkipReason::ReadFailed, err);
                return Outcome::Failed(SkipReason::ReadFailed);
            }
        };

        let metadata = match capture_metadata(&entry.path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(
                    "{}: {}: {:#}",
                    entry.path.display(),
                    SkipReason::MetadataFailed,
                    err
                );
                return Outcome::Failed(SkipReason::MetadataFailed);
            }
        };

        debug!("{}: {}", entry.path.display(), digest);

        Outcome::Recorded(FileRecord {
            path: entry.path.to_string_lossy().to_string(),
            digest,
            size_bytes: metadata.size_bytes,
            modified_time: metadata.modified_time,
            accessed_time: metadata.accessed_time,
            created_time: metadata.created_time,
            owner_id: metadata.owner_id,
            group_id: metadata.group_id,
            mode_bits: metadata.mode_bits,
        })
    }
}
