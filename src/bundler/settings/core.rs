//! Core Settings struct and implementations.

use super::{PackageSettings, Signing, SigningKeyInfo};
use std::path::{Path, PathBuf};

/// Directory, relative to the project root, where Gradle writes release APKs.
const RELEASE_OUTPUT_DIR: &str = "app/build/outputs/apk/release";

/// Main settings for a package build.
///
/// Central configuration for the [`PackageBuilder`], constructed via
/// [`SettingsBuilder`]. Holds the output directory, the package metadata and
/// the resolved [`Signing`] decision, and derives every artifact path the
/// pipeline reads or writes.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_android::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_android::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_out_directory("/tmp/twa")
///     .package_settings(PackageSettings {
///         package_id: "com.example.twa".into(),
///         host: "https://example.com".into(),
///         name: "Example".into(),
///         ..Default::default()
///     })
///     .build()?;
///
/// assert!(settings.unsigned_apk_path().ends_with("app-release-unsigned.apk"));
/// # Ok(())
/// # }
/// ```
///
/// [`PackageBuilder`]: crate::bundler::PackageBuilder
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Signing key as supplied, whatever the signing mode.
    signing_key: Option<SigningKeyInfo>,

    /// Signing decision derived from the package's signing mode and key.
    signing: Signing,

    /// Directory the Android project is generated into.
    ///
    /// All artifacts are written below it.
    project_out_directory: PathBuf,
}

impl Settings {
    /// Returns the package metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the Android application id.
    pub fn package_id(&self) -> &str {
        &self.package.package_id
    }

    /// Returns the signing decision.
    pub fn signing(&self) -> &Signing {
        &self.signing
    }

    /// Returns the signing key as supplied.
    ///
    /// Present even when the signing mode is `none`; use [`signing`] to decide
    /// whether the build is signed.
    ///
    /// [`signing`]: Settings::signing
    pub fn signing_key(&self) -> Option<&SigningKeyInfo> {
        self.signing_key.as_ref()
    }

    /// Returns the project output directory.
    pub fn project_out_directory(&self) -> &Path {
        &self.project_out_directory
    }

    /// Directory where Gradle places release outputs.
    pub fn release_output_directory(&self) -> PathBuf {
        self.project_out_directory.join(RELEASE_OUTPUT_DIR)
    }

    /// APK produced by `assembleRelease`.
    pub fn unsigned_apk_path(&self) -> PathBuf {
        self.release_output_directory()
            .join("app-release-unsigned.apk")
    }

    /// APK produced by zipalign.
    pub fn aligned_apk_path(&self) -> PathBuf {
        self.project_out_directory
            .join("app-release-unsigned-aligned.apk")
    }

    /// APK produced by apksigner.
    pub fn signed_apk_path(&self) -> PathBuf {
        self.project_out_directory.join("app-release-signed.apk")
    }

    /// Digital Asset Links file written after signing.
    pub fn asset_links_path(&self) -> PathBuf {
        self.release_output_directory().join("assetlinks.json")
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        signing_key: Option<SigningKeyInfo>,
        project_out_directory: PathBuf,
    ) -> Self {
        let signing = Signing::resolve(package.signing_mode, signing_key.clone());
        Self {
            package,
            signing_key,
            signing,
            project_out_directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::new(PackageSettings::default(), None, PathBuf::from("/out"))
    }

    #[test]
    fn artifact_paths_are_deterministic() {
        let settings = settings();
        assert_eq!(
            settings.unsigned_apk_path(),
            Path::new("/out/app/build/outputs/apk/release/app-release-unsigned.apk")
        );
        assert_eq!(
            settings.aligned_apk_path(),
            Path::new("/out/app-release-unsigned-aligned.apk")
        );
        assert_eq!(
            settings.signed_apk_path(),
            Path::new("/out/app-release-signed.apk")
        );
        assert_eq!(
            settings.asset_links_path(),
            Path::new("/out/app/build/outputs/apk/release/assetlinks.json")
        );
    }
}
