//! Package build orchestration.
//!
//! This module provides the [`PackageBuilder`] that drives the external
//! toolchain from a web app manifest to an installable APK.

use crate::bundler::{
    Error, KeySource, Result, Settings, Signing, SigningKeyInfo, TwaManifest,
    asset_links::generate_asset_links,
    error::ErrorExt,
    manifest::ShortcutNormalizer,
    toolchain::{KeyOptions, Toolchain},
    utils::fs,
};

use super::{
    artifact::{AlignedApk, CompiledApk, PackageResult, ScaffoldedProject, SignedApk},
    checksum::digest_file,
};
use std::path::PathBuf;

/// Fingerprint algorithm asset links are published for.
const ASSET_LINKS_ALGORITHM: &str = "SHA256";

/// Builds an Android package for a web app.
///
/// Runs a fixed sequence of steps, each awaited before the next:
///
/// 1. **Scaffold** the project from a [`TwaManifest`]
/// 2. **Compile** it with `assembleRelease`
/// 3. **Align** the unsigned APK
/// 4. For signed builds: create the key (new keys only), **sign**, then try to
///    generate `assetlinks.json`
///
/// Every step except asset links generation is fatal: its error is returned
/// unchanged and later steps do not run. Asset links failures are logged and
/// leave [`PackageResult::asset_links_path`] empty. No step is retried.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_android::bundler::{PackageBuilder, Settings, Toolchain, ToolchainConfig};
///
/// # async fn example(settings: Settings) -> kodegen_bundler_android::bundler::Result<()> {
/// let toolchain = Toolchain::from_config(&ToolchainConfig::from_env())?;
/// let result = PackageBuilder::new(settings, toolchain).generate_package().await?;
///
/// println!("Created: {} ({} bytes)", result.artifact_path.display(), result.size);
/// println!("SHA256: {}", result.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PackageBuilder {
    settings: Settings,
    toolchain: Toolchain,
    normalizer: ShortcutNormalizer,
}

impl PackageBuilder {
    /// Creates a builder for `settings` using `toolchain` for every external step.
    pub fn new(settings: Settings, toolchain: Toolchain) -> Self {
        Self {
            settings,
            toolchain,
            normalizer: ShortcutNormalizer::default(),
        }
    }

    /// Replaces the shortcut normalizer (and with it the icon selection rule).
    pub fn with_shortcut_normalizer(mut self, normalizer: ShortcutNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Returns a reference to the build settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds the manifest the scaffolder receives.
    pub fn manifest(&self) -> Result<TwaManifest> {
        TwaManifest::from_settings(
            self.settings.package(),
            self.settings.signing_key(),
            &self.normalizer,
        )
    }

    /// Runs the whole pipeline.
    ///
    /// # Returns
    ///
    /// - Unsigned builds: the aligned APK, no signing info, no asset links
    /// - Signed builds: the signed APK, the signing key used, and the asset
    ///   links path if it could be generated
    pub async fn generate_package(&self) -> Result<PackageResult> {
        log::info!(
            "Building Android package {} in {}",
            self.settings.package_id(),
            self.settings.project_out_directory().display()
        );

        let project = self.scaffold().await?;
        let compiled = self.compile(&project).await?;
        let aligned = self.optimize(&compiled).await?;

        let (artifact_path, signing_info, asset_links_path) = match self.settings.signing() {
            Signing::Unsigned => {
                log::info!("No signing key configured, producing an unsigned APK");
                (aligned.0, None, None)
            }
            Signing::Signed { key_source, key } => {
                let signed = self.sign(&aligned, *key_source, key).await?;
                let asset_links = self.try_generate_asset_links(key).await;
                (signed.0, Some(key.clone()), asset_links)
            }
        };

        let digest = digest_file(&artifact_path).await?;
        log::info!(
            "✓ Created {} ({} bytes, sha256 {})",
            artifact_path.display(),
            digest.size,
            digest.sha256
        );

        Ok(PackageResult {
            artifact_path,
            signing_info,
            asset_links_path,
            size: digest.size,
            checksum: digest.sha256,
        })
    }

    /// Generates the Android project into the output directory.
    pub async fn scaffold(&self) -> Result<ScaffoldedProject> {
        let manifest = self.manifest()?;
        let out_dir = self.settings.project_out_directory();

        log::info!("Generating TWA project...");
        fs::create_dir_all(out_dir, false).await?;
        self.toolchain
            .scaffolder
            .create_project(out_dir, &manifest)
            .await?;

        Ok(ScaffoldedProject(out_dir.to_path_buf()))
    }

    /// Compiles the project and locates the unsigned APK.
    pub async fn compile(&self, project: &ScaffoldedProject) -> Result<CompiledApk> {
        log::info!("Building the APK...");
        self.toolchain
            .build_tool
            .assemble_release(project.path())
            .await?;

        let apk = self.settings.unsigned_apk_path();
        let produced = tokio::fs::try_exists(&apk)
            .await
            .fs_context("checking compiled APK", &apk)?;
        if !produced {
            crate::bail!(
                "assembleRelease finished but {} was not produced",
                apk.display()
            );
        }

        Ok(CompiledApk(apk))
    }

    /// Zip-aligns the compiled APK.
    pub async fn optimize(&self, apk: &CompiledApk) -> Result<AlignedApk> {
        log::info!("Optimizing the APK...");
        let aligned = self.settings.aligned_apk_path();
        self.toolchain.aligner.align(apk.path(), &aligned).await?;
        Ok(AlignedApk(aligned))
    }

    /// Signs the aligned APK, creating the key store first for new keys.
    pub async fn sign(
        &self,
        apk: &AlignedApk,
        key_source: KeySource,
        key: &SigningKeyInfo,
    ) -> Result<SignedApk> {
        if key_source == KeySource::New {
            let overwrite_existing = true;
            self.toolchain
                .key_tool
                .create_key(&KeyOptions::from(key), overwrite_existing)
                .await?;
        }

        log::info!("Signing the APK...");
        let signed = self.settings.signed_apk_path();
        self.toolchain
            .signer
            .sign(
                &key.key_file_path,
                &key.store_password,
                &key.alias,
                &key.key_password,
                apk.path(),
                &signed,
            )
            .await?;

        Ok(SignedApk(signed))
    }

    /// Writes `assetlinks.json` for the signing key's SHA-256 fingerprint.
    pub async fn generate_asset_links(&self, key: &SigningKeyInfo) -> Result<PathBuf> {
        log::info!("Generating asset links...");
        let info = self
            .toolchain
            .key_tool
            .key_info(&KeyOptions::from(key))
            .await?;

        let fingerprint = info
            .fingerprints
            .get(ASSET_LINKS_ALGORITHM)
            .ok_or_else(|| Error::MissingFingerprint {
                alias: key.alias.clone(),
            })?;

        let document = generate_asset_links(self.settings.package_id(), fingerprint)?;
        let path = self.settings.asset_links_path();
        fs::write_file(&path, document.as_bytes()).await?;

        log::info!("Digital Asset Links file generated at {}", path.display());
        Ok(path)
    }

    /// [`generate_asset_links`](Self::generate_asset_links), with failures
    /// logged and turned into `None`.
    pub async fn try_generate_asset_links(&self, key: &SigningKeyInfo) -> Option<PathBuf> {
        match self.generate_asset_links(key).await {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!(
                    "Asset links couldn't be generated. Proceeding without asset links: {}",
                    e
                );
                None
            }
        }
    }
}
