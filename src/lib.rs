//! # rust-hasher
//!
//! A cross-platform file-integrity baselining tool written in Rust.
//!
//! ## Overview
//!
//! rust-hasher recursively inventories a directory tree, streams every
//! regular file through a cryptographic digest, captures per-file metadata
//! (size, timestamps, ownership, permission bits), and accumulates run-level
//! statistics. It is intended for integrity baselining and forensic triage
//! of a filesystem subtree.
//!
//! ## Features
//!
//! - **Streaming digests**: MD5, SHA-1, SHA-256, or SHA-512 computed in
//!   fixed-size chunks, so memory use is bounded regardless of file size
//! - **Fail-soft traversal**: per-file and per-subdirectory failures are
//!   counted and logged without aborting the run
//! - **Symlink-safe**: symbolic links are never followed or hashed
//! - **Parallel scanning**: optional worker pool for multi-core hashing
//! - **Multiple report formats**: aligned table, CSV, and JSON summary
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use rust_hasher::scanner::{ScanEngine, ScanOptions};
//! use rust_hasher::utils::hash::HashAlgorithm;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = ScanEngine::new(ScanOptions {
//!     algorithm: HashAlgorithm::Sha256,
//!     threads: 1,
//! });
//!
//! let results = engine.scan(Path::new("/evidence"))?;
//! println!(
//!     "{} files hashed, {} errors",
//!     results.summary.processed_count, results.summary.error_count
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Core data models and structures
//! - [`scanner`]: Directory traversal, classification, and the scan engine
//! - [`utils`]: Digest computation, report rendering, and run summaries
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models and structures used throughout the application
pub mod models;

/// Directory traversal, entry classification, and the scan engine
pub mod scanner;

/// Utility functions for hashing, reporting, and run summaries
pub mod utils;

/// Application constants and configuration values
pub mod constants;
