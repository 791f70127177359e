//! Android package building for web apps.
//!
//! Turns a web app's package settings into a Trusted Web Activity APK by
//! driving the external Android toolchain:
//!
//! 1. Shape the settings into a [`TwaManifest`] (shortcut normalization,
//!    host reduction, signing key reference)
//! 2. Generate the Android project from it
//! 3. Compile, align and optionally sign the APK
//! 4. For signed builds, write `assetlinks.json`
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_android::bundler::{
//!     PackageBuilder, PackageSettings, SettingsBuilder, Toolchain, ToolchainConfig,
//! };
//!
//! # async fn example() -> kodegen_bundler_android::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_out_directory("/tmp/twa")
//!     .package_settings(PackageSettings {
//!         package_id: "com.example.twa".into(),
//!         host: "https://example.com".into(),
//!         name: "Example".into(),
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let toolchain = Toolchain::from_config(&ToolchainConfig::from_env())?;
//! let result = PackageBuilder::new(settings, toolchain).generate_package().await?;
//! println!("Created: {}", result.artifact_path.display());
//! # Ok(())
//! # }
//! ```

pub mod asset_links;
pub mod builder;
pub mod error;
pub mod manifest;
pub mod settings;
pub mod toolchain;
pub mod utils;

pub use asset_links::generate_asset_links;
pub use builder::{PackageBuilder, PackageResult};
pub use error::{Error, Result};
pub use manifest::{ShortcutDescriptor, ShortcutNormalizer, TwaManifest, normalize_shortcuts};
pub use settings::{
    IconEntry, KeySource, PackageSettings, Settings, SettingsBuilder, ShortcutEntry, Signing,
    SigningKeyInfo, SigningMode,
};
pub use toolchain::{Toolchain, ToolchainConfig};
