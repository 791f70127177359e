//! External toolchain collaborators.
//!
//! The package pipeline never touches the Android toolchain directly. Each
//! external step sits behind one of the traits below so it can be replaced
//! (for tests, or for a different generator) without touching the pipeline:
//!
//! - [`ProjectScaffolder`] - generates the Android project from a manifest
//! - [`BuildTool`] - compiles the release APK
//! - [`AlignmentTool`] - zip-aligns the APK
//! - [`KeyTool`] - creates key stores and reads certificate fingerprints
//! - [`ApkSigner`] - signs the aligned APK
//!
//! [`Toolchain::from_config`] wires up the process-backed implementations:
//! [`TwaScaffolder`], [`Gradle`], [`AndroidSdk`] and [`JdkKeyTool`].

mod android_sdk;
mod config;
mod gradle;
mod keytool;
mod process;
mod scaffold;

pub use android_sdk::AndroidSdk;
pub use config::ToolchainConfig;
pub use gradle::Gradle;
pub use keytool::JdkKeyTool;
pub use process::ToolCommand;
pub use scaffold::{TWA_MANIFEST_FILE, TwaScaffolder};

use async_trait::async_trait;
use std::{collections::BTreeMap, path::Path, path::PathBuf, sync::Arc};

use crate::bundler::{Result, SigningKeyInfo, TwaManifest};

/// Writes a complete, buildable project for `manifest` into `out_dir`.
#[async_trait]
pub trait ProjectScaffolder: Send + Sync {
    async fn create_project(&self, out_dir: &Path, manifest: &TwaManifest) -> Result<()>;
}

/// Compiles a scaffolded project into an unsigned release APK.
#[async_trait]
pub trait BuildTool: Send + Sync {
    async fn assemble_release(&self, project_dir: &Path) -> Result<()>;
}

/// Produces an alignment-optimized copy of an APK.
#[async_trait]
pub trait AlignmentTool: Send + Sync {
    async fn align(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Key store management.
#[async_trait]
pub trait KeyTool: Send + Sync {
    /// Creates a key store holding a single key pair.
    async fn create_key(&self, options: &KeyOptions, overwrite_existing: bool) -> Result<()>;

    /// Reads the certificate fingerprints of the key at `options.alias`.
    async fn key_info(&self, options: &KeyOptions) -> Result<KeyInfo>;
}

/// Signs APKs with a key from a key store.
#[async_trait]
pub trait ApkSigner: Send + Sync {
    async fn sign(
        &self,
        key_path: &Path,
        store_password: &str,
        alias: &str,
        key_password: &str,
        input: &Path,
        output: &Path,
    ) -> Result<()>;
}

/// Key store location, credentials and holder identity as [`KeyTool`] takes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOptions {
    pub path: PathBuf,
    pub store_password: String,
    pub key_password: String,
    pub alias: String,
    pub full_name: String,
    pub organization: String,
    pub organizational_unit: String,
    pub country: String,
}

impl From<&SigningKeyInfo> for KeyOptions {
    fn from(key: &SigningKeyInfo) -> Self {
        Self {
            path: key.key_file_path.clone(),
            store_password: key.store_password.clone(),
            key_password: key.key_password.clone(),
            alias: key.alias.clone(),
            full_name: key.full_name.clone(),
            organization: key.organization.clone(),
            organizational_unit: key.organizational_unit.clone(),
            country: key.country_code.clone(),
        }
    }
}

/// Certificate details reported by [`KeyTool::key_info`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInfo {
    /// Algorithm (`SHA1`, `SHA256`, ...) to colon separated hex fingerprint.
    pub fingerprints: BTreeMap<String, String>,
}

/// The full set of collaborators a [`PackageBuilder`] runs.
///
/// [`PackageBuilder`]: crate::bundler::PackageBuilder
#[derive(Clone)]
pub struct Toolchain {
    pub scaffolder: Arc<dyn ProjectScaffolder>,
    pub build_tool: Arc<dyn BuildTool>,
    pub aligner: Arc<dyn AlignmentTool>,
    pub key_tool: Arc<dyn KeyTool>,
    pub signer: Arc<dyn ApkSigner>,
}

impl std::fmt::Debug for Toolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolchain").finish_non_exhaustive()
    }
}

impl Toolchain {
    /// Locates the installed tools described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] when the generator, the Android SDK or
    /// `keytool` cannot be found.
    ///
    /// [`Error::ToolNotFound`]: crate::bundler::Error::ToolNotFound
    pub fn from_config(config: &ToolchainConfig) -> Result<Self> {
        let sdk = Arc::new(AndroidSdk::find(config)?);

        Ok(Self {
            scaffolder: Arc::new(TwaScaffolder::find(config)?),
            build_tool: Arc::new(Gradle::new(config)),
            aligner: sdk.clone(),
            key_tool: Arc::new(JdkKeyTool::find(config)?),
            signer: sdk,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_options_copy_descriptor_fields() {
        let key = SigningKeyInfo {
            key_file_path: "/keys/app.keystore".into(),
            store_password: "store".into(),
            key_password: "key".into(),
            alias: "alias".into(),
            full_name: "Jane Doe".into(),
            organization: "Example".into(),
            organizational_unit: "Engineering".into(),
            country_code: "US".into(),
        };

        let options = KeyOptions::from(&key);
        assert_eq!(options.path, PathBuf::from("/keys/app.keystore"));
        assert_eq!(options.country, "US");
        assert_eq!(options.organizational_unit, "Engineering");
    }
}
