//! Builder for constructing Settings.

use super::{PackageSettings, Settings, SigningKeyInfo};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_android::bundler::{PackageSettings, SettingsBuilder, SigningKeyInfo, SigningMode};
///
/// # fn example() -> kodegen_bundler_android::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_out_directory("/tmp/twa")
///     .package_settings(PackageSettings {
///         package_id: "com.example.twa".into(),
///         host: "https://example.com".into(),
///         name: "Example".into(),
///         signing_mode: SigningMode::New,
///         ..Default::default()
///     })
///     .signing_key(SigningKeyInfo {
///         key_file_path: "/tmp/twa/signing.keystore".into(),
///         store_password: "secret".into(),
///         key_password: "secret".into(),
///         alias: "my-key-alias".into(),
///         ..Default::default()
///     })
///     .build()?;
///
/// assert!(settings.signing().is_signed());
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_out_directory: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    signing_key: Option<SigningKeyInfo>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory the Android project is generated into.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_out_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_out_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the signing key.
    ///
    /// Only used when the package's signing mode is `new` or `existing`.
    ///
    /// Default: None (unsigned build)
    pub fn signing_key(mut self, key: SigningKeyInfo) -> Self {
        self.signing_key = Some(key);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `project_out_directory`
    /// - `package_settings`
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let package = self
            .package_settings
            .context("package_settings is required")?;
        let project_out_directory = self
            .project_out_directory
            .context("project_out_directory is required")?;
        Ok(Settings::new(package, self.signing_key, project_out_directory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{Signing, SigningMode};

    #[test]
    fn missing_out_directory_is_an_error() {
        let err = SettingsBuilder::new()
            .package_settings(PackageSettings::default())
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "project_out_directory is required");
    }

    #[test]
    fn missing_package_settings_is_an_error() {
        let err = SettingsBuilder::new()
            .project_out_directory("/out")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "package_settings is required");
    }

    #[test]
    fn signing_mode_without_key_builds_unsigned() {
        let settings = SettingsBuilder::new()
            .project_out_directory("/out")
            .package_settings(PackageSettings {
                signing_mode: SigningMode::Existing,
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(settings.signing(), &Signing::Unsigned);
        assert!(settings.signing_key().is_none());
    }

    #[test]
    fn key_is_kept_when_signing_mode_is_none() {
        let key = SigningKeyInfo {
            key_file_path: "/keys/app.keystore".into(),
            alias: "my-key-alias".into(),
            ..Default::default()
        };
        let settings = SettingsBuilder::new()
            .project_out_directory("/out")
            .package_settings(PackageSettings::default())
            .signing_key(key.clone())
            .build()
            .unwrap();

        assert_eq!(settings.signing(), &Signing::Unsigned);
        assert_eq!(settings.signing_key(), Some(&key));
    }
}
