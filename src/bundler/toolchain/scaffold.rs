//! Project scaffolding through the external TWA project generator.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{ProjectScaffolder, ToolCommand, ToolchainConfig};
use crate::bundler::{Error, Result, TwaManifest, utils::fs};

/// File name the generator reads the manifest from.
pub const TWA_MANIFEST_FILE: &str = "twa-manifest.json";

/// Writes `twa-manifest.json` and lets `bubblewrap` generate the project.
///
/// The generator regenerates every template file on each run, so scaffolding
/// into an existing output directory overwrites the previous project.
#[derive(Debug, Clone)]
pub struct TwaScaffolder {
    generator: PathBuf,
}

impl TwaScaffolder {
    pub fn find(config: &ToolchainConfig) -> Result<Self> {
        let generator = match &config.generator_path {
            Some(path) => path.clone(),
            None => which::which("bubblewrap").map_err(|e| Error::ToolNotFound {
                tool: "bubblewrap".to_string(),
                hint: format!("{e}; install it with `npm i -g @bubblewrap/cli`"),
            })?,
        };

        Ok(Self { generator })
    }
}

#[async_trait]
impl ProjectScaffolder for TwaScaffolder {
    async fn create_project(&self, out_dir: &Path, manifest: &TwaManifest) -> Result<()> {
        let manifest_path = out_dir.join(TWA_MANIFEST_FILE);
        fs::write_file(&manifest_path, manifest.to_json_pretty()?.as_bytes()).await?;

        ToolCommand::new("bubblewrap", &self.generator)
            .args(["update", "--skipVersionUpgrade"])
            .arg(format!("--manifest={}", manifest_path.display()))
            .current_dir(out_dir)
            .run()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{PackageSettings, manifest::ShortcutNormalizer};

    fn manifest() -> TwaManifest {
        TwaManifest::from_settings(
            &PackageSettings {
                package_id: "com.example.twa".into(),
                host: "https://example.com".into(),
                name: "Example".into(),
                ..Default::default()
            },
            None,
            &ShortcutNormalizer::default(),
        )
        .unwrap()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn manifest_is_written_before_generator_runs() {
        use std::os::unix::fs::PermissionsExt;

        let tools = tempfile::tempdir().unwrap();
        let generator = tools.path().join("bubblewrap");
        std::fs::write(
            &generator,
            "#!/bin/sh\ntest -f twa-manifest.json && echo \"$@\" > generated.txt\n",
        )
        .unwrap();
        std::fs::set_permissions(&generator, std::fs::Permissions::from_mode(0o755)).unwrap();

        let out = tempfile::tempdir().unwrap();
        let out_dir = out.path().join("project");
        let scaffolder = TwaScaffolder::find(&ToolchainConfig {
            generator_path: Some(generator),
            ..Default::default()
        })
        .unwrap();
        scaffolder.create_project(&out_dir, &manifest()).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(out_dir.join(TWA_MANIFEST_FILE)).unwrap())
                .unwrap();
        assert_eq!(written["host"], "example.com");

        let args = std::fs::read_to_string(out_dir.join("generated.txt")).unwrap();
        assert!(args.starts_with("update --skipVersionUpgrade --manifest="));
    }
}
