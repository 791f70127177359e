//! JDK `keytool` integration: key generation and fingerprint lookup.

use async_trait::async_trait;
use std::{collections::BTreeMap, path::PathBuf};

use super::{KeyInfo, KeyOptions, KeyTool, ToolCommand, ToolchainConfig};
use crate::bundler::{Error, Result, error::ErrorExt};

/// Validity of generated keys, in days.
const KEY_VALIDITY_DAYS: &str = "20000";

/// Fingerprint algorithms reported by `keytool -list -v`.
const FINGERPRINT_ALGORITHMS: [&str; 3] = ["MD5", "SHA1", "SHA256"];

/// `keytool` from the configured JDK, or from `PATH`.
#[derive(Debug, Clone)]
pub struct JdkKeyTool {
    keytool: PathBuf,
}

impl JdkKeyTool {
    pub fn find(config: &ToolchainConfig) -> Result<Self> {
        let keytool = match &config.jdk_path {
            Some(jdk) => jdk.join("bin").join(if cfg!(windows) {
                "keytool.exe"
            } else {
                "keytool"
            }),
            None => which::which("keytool").map_err(|e| Error::ToolNotFound {
                tool: "keytool".to_string(),
                hint: format!("{e}; set JDK8PATH or JAVA_HOME"),
            })?,
        };

        Ok(Self { keytool })
    }
}

#[async_trait]
impl KeyTool for JdkKeyTool {
    async fn create_key(&self, options: &KeyOptions, overwrite_existing: bool) -> Result<()> {
        let exists = tokio::fs::try_exists(&options.path)
            .await
            .fs_context("checking key store", &options.path)?;
        if exists {
            if !overwrite_existing {
                log::info!(
                    "Key store {} already exists, keeping it",
                    options.path.display()
                );
                return Ok(());
            }
            tokio::fs::remove_file(&options.path)
                .await
                .fs_context("removing existing key store", &options.path)?;
        }
        if let Some(parent) = options.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .fs_context("creating key store directory", parent)?;
        }

        log::info!("Creating signing key {}", options.alias);
        ToolCommand::new("keytool", &self.keytool)
            .args(["-genkeypair", "-dname"])
            .arg(distinguished_name(options))
            .args(["-alias", options.alias.as_str(), "-keypass"])
            .secret_arg(&options.key_password)
            .arg("-keystore")
            .arg(&options.path)
            .arg("-storepass")
            .secret_arg(&options.store_password)
            .args(["-validity", KEY_VALIDITY_DAYS, "-keyalg", "RSA"])
            .run()
            .await?;
        Ok(())
    }

    async fn key_info(&self, options: &KeyOptions) -> Result<KeyInfo> {
        let output = ToolCommand::new("keytool", &self.keytool)
            .args(["-list", "-v", "-keystore"])
            .arg(&options.path)
            .args(["-alias", options.alias.as_str(), "-storepass"])
            .secret_arg(&options.store_password)
            .arg("-keypass")
            .secret_arg(&options.key_password)
            .run()
            .await?;

        Ok(KeyInfo {
            fingerprints: parse_fingerprints(&String::from_utf8_lossy(&output.stdout)),
        })
    }
}

/// Builds the X.500 name passed to `-dname`, escaping separators.
fn distinguished_name(options: &KeyOptions) -> String {
    fn escape(value: &str) -> String {
        value.replace('\\', "\\\\").replace(',', "\\,")
    }

    format!(
        "cn={}, ou={}, o={}, c={}",
        escape(&options.full_name),
        escape(&options.organizational_unit),
        escape(&options.organization),
        escape(&options.country),
    )
}

/// Extracts `ALG: HEX` fingerprint lines from `keytool -list -v` output.
fn parse_fingerprints(listing: &str) -> BTreeMap<String, String> {
    listing
        .lines()
        .filter_map(|line| line.trim().split_once(": "))
        .filter(|(algorithm, _)| FINGERPRINT_ALGORITHMS.contains(algorithm))
        .map(|(algorithm, value)| (algorithm.to_string(), value.trim().to_string()))
        .collect()
}
