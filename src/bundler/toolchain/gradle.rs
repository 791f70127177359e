//! Gradle wrapper invocation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{BuildTool, ToolCommand, ToolchainConfig};
use crate::bundler::{Error, Result};

/// Runs the Gradle wrapper shipped inside a generated project.
#[derive(Debug, Clone, Default)]
pub struct Gradle {
    java_home: Option<PathBuf>,
    android_home: Option<PathBuf>,
}

impl Gradle {
    pub fn new(config: &ToolchainConfig) -> Self {
        Self {
            java_home: config.jdk_path.clone(),
            android_home: config.android_sdk_path.clone(),
        }
    }

    fn wrapper_path(project_dir: &Path) -> PathBuf {
        if cfg!(windows) {
            project_dir.join("gradlew.bat")
        } else {
            project_dir.join("gradlew")
        }
    }
}

#[async_trait]
impl BuildTool for Gradle {
    async fn assemble_release(&self, project_dir: &Path) -> Result<()> {
        let wrapper = Self::wrapper_path(project_dir);
        if !wrapper.exists() {
            return Err(Error::ToolNotFound {
                tool: "gradlew".to_string(),
                hint: format!(
                    "{} is missing; was the project scaffolded?",
                    wrapper.display()
                ),
            });
        }

        let mut command = ToolCommand::new("gradle", wrapper)
            .args(["assembleRelease", "--stacktrace"])
            .current_dir(project_dir);
        if let Some(java_home) = &self.java_home {
            command = command.env("JAVA_HOME", java_home);
        }
        if let Some(android_home) = &self.android_home {
            command = command
                .env("ANDROID_HOME", android_home)
                .env("ANDROID_SDK_ROOT", android_home);
        }

        command.run().await?;
        Ok(())
    }
}
