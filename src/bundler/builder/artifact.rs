//! Pipeline stage outputs and the final build result.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::bundler::SigningKeyInfo;

/// Output directory after the project generator ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedProject(pub(crate) PathBuf);

/// Unsigned APK produced by the build tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledApk(pub(crate) PathBuf);

/// Zip-aligned copy of the compiled APK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedApk(pub(crate) PathBuf);

/// Aligned APK signed with the configured key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedApk(pub(crate) PathBuf);

macro_rules! stage_path {
    ($($stage:ty),+ $(,)?) => {
        $(
            impl $stage {
                pub fn path(&self) -> &Path {
                    &self.0
                }
            }
        )+
    };
}

stage_path!(ScaffoldedProject, CompiledApk, AlignedApk, SignedApk);

/// Result of a package build.
///
/// Unsigned builds carry neither signing info nor an asset links path. Signed
/// builds always carry the signing info; the asset links path is `None` only
/// when generating it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResult {
    /// The APK to distribute: signed if a key was used, aligned otherwise.
    pub artifact_path: PathBuf,
    pub signing_info: Option<SigningKeyInfo>,
    pub asset_links_path: Option<PathBuf>,
    /// Artifact size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the artifact.
    pub checksum: String,
}

impl PackageResult {
    /// True when the APK was signed but `assetlinks.json` could not be generated.
    pub fn missing_asset_links(&self) -> bool {
        self.signing_info.is_some() && self.asset_links_path.is_none()
    }
}
