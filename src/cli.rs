use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::utils::hash::HashAlgorithm;

/// Command-line arguments for the rust-hasher tool.
///
/// Exactly one digest algorithm must be selected; the flags are mutually
/// exclusive and required, matching the one-algorithm-per-run model.
#[derive(Parser, Debug)]
#[clap(name = "rust-hasher", about = "Cross-platform file-integrity baselining tool")]
#[clap(group(ArgGroup::new("algorithm").required(true).multiple(false)))]
pub struct Args {
    /// Root path of the directory subtree to inventory
    #[clap(short = 'd', long)]
    pub root_path: PathBuf,

    /// Hash file content with MD5
    #[clap(long, group = "algorithm")]
    pub md5: bool,

    /// Hash file content with SHA-1
    #[clap(long, group = "algorithm")]
    pub sha1: bool,

    /// Hash file content with SHA-256
    #[clap(long, group = "algorithm")]
    pub sha256: bool,

    /// Hash file content with SHA-512
    #[clap(long, group = "algorithm")]
    pub sha512: bool,

    /// Directory for the report files (default: current directory)
    #[clap(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Worker threads for hashing; 1 is sequential, 0 uses all cores
    #[clap(long, default_value = "1")]
    pub threads: usize,

    /// Skip writing the table, CSV, and JSON report files
    #[clap(long)]
    pub no_reports: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The algorithm selected by the mutually exclusive flag group.
    pub fn algorithm(&self) -> HashAlgorithm {
        if self.md5 {
            HashAlgorithm::Md5
        } else if self.sha1 {
            HashAlgorithm::Sha1
        } else if self.sha256 {
            HashAlgorithm::Sha256
        } else {
            HashAlgorithm::Sha512
        }
    }

    /// Resolved worker-thread count (`--threads 0` means all cores).
    pub fn worker_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}
