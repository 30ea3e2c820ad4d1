//! Utility functions for digest computation and result reporting.
//!
//! ## Components
//!
//! - **Hashing**: streaming MD5/SHA-1/SHA-256/SHA-512 calculation
//! - **Report**: table, plain-text, and CSV renderings of scan results
//! - **Summary**: machine-readable JSON summary of a whole run
//!
//! ## Generating a File Hash
//!
//! ```no_run
//! use std::path::Path;
//! use rust_hasher::utils::hash::{hash_file, HashAlgorithm};
//!
//! # fn example() -> anyhow::Result<()> {
//! let digest = hash_file(Path::new("/evidence/suspicious.bin"), HashAlgorithm::Sha256)?;
//! println!("SHA256: {}", digest);
//! # Ok(())
//! # }
//! ```

/// Streaming cryptographic hash calculation
pub mod hash;

/// Table, plain-text, and CSV report rendering
pub mod report;

/// JSON run summary generation
pub mod summary;
