//! Command line interface for the Android package builder.
//!
//! Loads the package settings and optional signing key, locates the
//! toolchain, runs the build and prints the result.

mod args;

pub use args::Args;

use anyhow::Context as _;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::bundler::{
    PackageBuilder, PackageSettings, SettingsBuilder, SigningKeyInfo, SigningMode, Toolchain,
    ToolchainConfig, utils::fs,
};
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs a build for already parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let package: PackageSettings = read_json(&args.settings, "package settings").await?;
    let signing_key = match &args.signing_key {
        Some(path) => Some(read_json::<SigningKeyInfo>(path, "signing key").await?),
        None => None,
    };

    if package.signing_mode != SigningMode::None && signing_key.is_none() {
        log::warn!(
            "Signing mode is {:?} but no signing key was given; building an unsigned APK",
            package.signing_mode
        );
    }

    let existing_key = signing_key
        .as_ref()
        .filter(|_| package.signing_mode == SigningMode::Existing);
    if let Some(key) = existing_key {
        args.validate_key_store(&key.key_file_path)
            .map_err(|reason| CliError::InvalidArguments { reason })?;
    }

    fs::create_dir_all(&args.output_dir, args.clean).await?;

    let mut settings = SettingsBuilder::new()
        .project_out_directory(&args.output_dir)
        .package_settings(package);
    if let Some(key) = signing_key {
        settings = settings.signing_key(key);
    }
    let settings = settings.build()?;

    let config = args.toolchain_config().or(ToolchainConfig::from_env());
    let toolchain = Toolchain::from_config(&config)?;

    let result = PackageBuilder::new(settings, toolchain)
        .generate_package()
        .await?;

    if result.missing_asset_links() {
        eprintln!("Warning: APK was signed but assetlinks.json could not be generated");
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(0)
}

async fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {} from {}", what, path.display()))?;
    let value = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {} from {}", what, path.display()))?;
    Ok(value)
}
