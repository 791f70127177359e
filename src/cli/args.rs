//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation of
//! the input files before any tool runs.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::bundler::ToolchainConfig;

/// Trusted Web Activity package builder for web apps
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_android",
    version,
    about = "Builds an Android package (APK) for a web app",
    long_about = "Generates a Trusted Web Activity project for a web app, compiles and aligns the APK,
and optionally signs it and writes assetlinks.json.

Usage:
  kodegen_bundler_android --settings app.json --output-dir ./twa
  kodegen_bundler_android --settings app.json --output-dir ./twa --signing-key key.json

On success the build result is printed to stdout as JSON."
)]
pub struct Args {
    /// Package settings JSON file
    #[arg(short = 's', long, value_name = "FILE")]
    pub settings: PathBuf,

    /// Directory the Android project is generated into
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Signing key JSON file, used when the settings' signingMode is `new` or `existing`
    #[arg(short = 'k', long, value_name = "FILE")]
    pub signing_key: Option<PathBuf>,

    /// JDK home directory (keytool is taken from its bin/)
    #[arg(long, value_name = "DIR", env = "JDK8PATH")]
    pub jdk_path: Option<PathBuf>,

    /// Android SDK root directory
    #[arg(long, value_name = "DIR", env = "ANDROIDTOOLSPATH")]
    pub android_sdk: Option<PathBuf>,

    /// Android build-tools version (defaults to the highest installed)
    #[arg(long, value_name = "VERSION")]
    pub build_tools_version: Option<String>,

    /// Project generator executable (defaults to `bubblewrap` on PATH)
    #[arg(long, value_name = "FILE")]
    pub generator: Option<PathBuf>,

    /// Erase the output directory before building
    #[arg(long)]
    pub clean: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.settings.is_file() {
            return Err(format!(
                "Settings file not found: {}",
                self.settings.display()
            ));
        }

        if let Some(key) = self.signing_key.as_deref().filter(|key| !key.is_file()) {
            return Err(format!("Signing key file not found: {}", key.display()));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }

        Ok(())
    }

    /// Rejects `--clean` when it would erase an existing key store.
    pub fn validate_key_store(&self, key_store: &Path) -> Result<(), String> {
        if self.clean && is_within(key_store, &self.output_dir) {
            return Err(format!(
                "--clean would delete the key store {} inside {}",
                key_store.display(),
                self.output_dir.display()
            ));
        }
        Ok(())
    }

    /// Toolchain locations given on the command line.
    ///
    /// Unset fields are filled from the environment by the caller.
    pub fn toolchain_config(&self) -> ToolchainConfig {
        ToolchainConfig {
            jdk_path: self.jdk_path.clone(),
            android_sdk_path: self.android_sdk.clone(),
            build_tools_version: self.build_tools_version.clone(),
            generator_path: self.generator.clone(),
        }
    }
}

/// True when `path` lies below `dir`, comparing absolute forms.
fn is_within(path: &Path, dir: &Path) -> bool {
    match (std::path::absolute(path), std::path::absolute(dir)) {
        (Ok(path), Ok(dir)) => path.starts_with(dir),
        _ => false,
    }
}
