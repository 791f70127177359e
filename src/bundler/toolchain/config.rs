//! Toolchain location configuration.

use std::path::PathBuf;

/// Where to find the JDK, the Android SDK and the project generator.
///
/// Unset fields fall back to environment variables (see [`from_env`]) and then
/// to `PATH` lookups.
///
/// [`from_env`]: ToolchainConfig::from_env
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// JDK home; `keytool` is taken from its `bin/`.
    pub jdk_path: Option<PathBuf>,
    /// Android SDK root containing `build-tools/`.
    pub android_sdk_path: Option<PathBuf>,
    /// Build tools version to use. Defaults to the highest installed.
    pub build_tools_version: Option<String>,
    /// Project generator executable. Defaults to `bubblewrap` on `PATH`.
    pub generator_path: Option<PathBuf>,
}

impl ToolchainConfig {
    /// Reads `JDK8PATH`/`JAVA_HOME` and `ANDROIDTOOLSPATH`/`ANDROID_SDK_ROOT`/`ANDROID_HOME`.
    pub fn from_env() -> Self {
        Self {
            jdk_path: first_env(&["JDK8PATH", "JAVA_HOME"]),
            android_sdk_path: first_env(&["ANDROIDTOOLSPATH", "ANDROID_SDK_ROOT", "ANDROID_HOME"]),
            build_tools_version: None,
            generator_path: None,
        }
    }

    /// Fills unset fields from `fallback`.
    pub fn or(self, fallback: ToolchainConfig) -> Self {
        Self {
            jdk_path: self.jdk_path.or(fallback.jdk_path),
            android_sdk_path: self.android_sdk_path.or(fallback.android_sdk_path),
            build_tools_version: self.build_tools_version.or(fallback.build_tools_version),
            generator_path: self.generator_path.or(fallback.generator_path),
        }
    }
}

fn first_env(names: &[&str]) -> Option<PathBuf> {
    names
        .iter()
        .filter_map(|name| std::env::var_os(name))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}
