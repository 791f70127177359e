//! File system utilities for package builds.
//!
//! Idempotent directory helpers and file writes that create parent
//! directories, with path context on every error.

use crate::bundler::error::{ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Writes `contents` to `path`, creating any parent directories as needed.
pub async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating parent directory", parent)?;
    }
    fs::write(path, contents)
        .await
        .fs_context("writing file", path)
}

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app/build/outputs/apk/release/assetlinks.json");

        write_file(&path, b"[]").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"[]");
    }

    #[tokio::test]
    async fn create_dir_all_erases_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("project");
        std::fs::create_dir_all(&project).unwrap();
        std::fs::write(project.join("stale.apk"), b"old").unwrap();

        create_dir_all(&project, false).await.unwrap();
        assert!(project.join("stale.apk").exists());

        create_dir_all(&project, true).await.unwrap();
        assert!(project.exists());
        assert!(!project.join("stale.apk").exists());
    }

    #[tokio::test]
    async fn remove_missing_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        remove_dir_all(&dir.path().join("missing")).await.unwrap();
    }
}
