//! Artifact checksum calculation.
//!
//! SHA-256 and size of the final APK, reported alongside the artifact path so
//! callers can verify downloads.

use crate::bundler::{Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Size and checksum of a built artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDigest {
    /// File size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 (64 characters).
    pub sha256: String,
}

/// Calculates size and SHA256 checksum of a file.
///
/// Reads the file in 8KB chunks to handle large APKs efficiently.
pub async fn digest_file(path: &Path) -> Result<ArtifactDigest> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening artifact for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];
    let mut size = 0u64;

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading artifact for hash calculation", path)?;
        if n == 0 {
            break;
        }
        size += n as u64;
        hasher.update(&buffer[..n]);
    }

    Ok(ArtifactDigest {
        size,
        sha256: format!("{:x}", hasher.finalize()),
    })
}
