//! Android SDK build tools: zipalign and apksigner.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{AlignmentTool, ApkSigner, ToolCommand, ToolchainConfig};
use crate::bundler::{
    Error, Result,
    error::{Context, ErrorExt},
};

/// Located Android SDK with a chosen build-tools version.
#[derive(Debug, Clone)]
pub struct AndroidSdk {
    pub sdk_path: PathBuf,
    pub build_tools_version: String,
}

impl AndroidSdk {
    /// Locates the SDK from the configuration.
    ///
    /// Uses the configured build-tools version, or the highest one installed.
    pub fn find(config: &ToolchainConfig) -> Result<Self> {
        let sdk_path = config.android_sdk_path.clone().ok_or_else(|| Error::ToolNotFound {
            tool: "Android SDK".to_string(),
            hint: "set ANDROIDTOOLSPATH, ANDROID_SDK_ROOT or ANDROID_HOME".to_string(),
        })?;

        let build_tools_dir = sdk_path.join("build-tools");
        let build_tools_version = match &config.build_tools_version {
            Some(version) => version.clone(),
            None => highest_build_tools(&build_tools_dir)?,
        };

        let sdk = Self {
            sdk_path,
            build_tools_version,
        };
        log::debug!(
            "Using Android SDK at {} (build-tools {})",
            sdk.sdk_path.display(),
            sdk.build_tools_version
        );
        Ok(sdk)
    }

    /// Path to a program in the selected build-tools directory.
    pub fn tool_path(&self, tool: &str) -> PathBuf {
        let file_name = if cfg!(windows) {
            match tool {
                "apksigner" => "apksigner.bat".to_string(),
                other => format!("{other}.exe"),
            }
        } else {
            tool.to_string()
        };

        self.sdk_path
            .join("build-tools")
            .join(&self.build_tools_version)
            .join(file_name)
    }
}

/// Picks the highest numeric version directory under `build-tools/`.
fn highest_build_tools(build_tools_dir: &Path) -> Result<String> {
    let entries = std::fs::read_dir(build_tools_dir)
        .fs_context("reading Android build-tools directory", build_tools_dir)?;

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            parse_version(&name).map(|version| (version, name))
        })
        .max()
        .map(|(_, name)| name)
        .with_context(|| {
            format!(
                "no build-tools versions installed in {}",
                build_tools_dir.display()
            )
        })
}

/// `"34.0.0"` to `[34, 0, 0]`; `None` for names like `"34.0.0-rc1"` or `"tmp"`.
fn parse_version(name: &str) -> Option<Vec<u32>> {
    name.split('.').map(|part| part.parse().ok()).collect()
}

fn path_arg(path: &Path) -> Result<&str> {
    path.to_str()
        .with_context(|| format!("path is not valid UTF-8: {}", path.display()))
}

#[async_trait]
impl AlignmentTool for AndroidSdk {
    async fn align(&self, input: &Path, output: &Path) -> Result<()> {
        ToolCommand::new("zipalign", self.tool_path("zipalign"))
            .args(["-v", "-f", "-p", "4"])
            .args([path_arg(input)?, path_arg(output)?])
            .run()
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ApkSigner for AndroidSdk {
    async fn sign(
        &self,
        key_path: &Path,
        store_password: &str,
        alias: &str,
        key_password: &str,
        input: &Path,
        output: &Path,
    ) -> Result<()> {
        ToolCommand::new("apksigner", self.tool_path("apksigner"))
            .args(["sign", "--ks", path_arg(key_path)?, "--ks-key-alias", alias])
            .arg("--ks-pass")
            .secret_arg(format!("pass:{store_password}"))
            .arg("--key-pass")
            .secret_arg(format!("pass:{key_password}"))
            .args(["--out", path_arg(output)?, path_arg(input)?])
            .run()
            .await?;
        Ok(())
    }
}
