//! Trusted Web Activity manifest generation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use super::shortcuts::{ShortcutDescriptor, ShortcutNormalizer};
use crate::bundler::{
    Error, PackageSettings, Result, SigningKeyInfo,
    error::Context,
};

/// Provenance tag written to every generated manifest.
pub const GENERATOR_APP: &str = env!("CARGO_PKG_NAME");

/// Key store reference embedded in the manifest.
///
/// Both fields are empty strings for unsigned builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKeyRef {
    pub path: String,
    pub alias: String,
}

/// The manifest handed to the project scaffolder.
///
/// Serializes to the `twa-manifest.json` layout: camelCase keys, with every
/// package setting the bundler does not rewrite carried in [`fields`].
///
/// [`fields`]: TwaManifest::fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwaManifest {
    pub package_id: String,
    /// Bare authority (`example.com`, `example.com:8443`), never a full URL.
    pub host: String,
    pub name: String,
    pub launcher_name: String,
    pub shortcuts: Vec<ShortcutDescriptor>,
    pub signing_key: SigningKeyRef,
    pub generator_app: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Keys the manifest sets explicitly; settings fields with these names are
/// dropped from the passthrough so each key is written once.
const REWRITTEN_KEYS: [&str; 7] = [
    "packageId",
    "host",
    "name",
    "launcherName",
    "shortcuts",
    "signingKey",
    "generatorApp",
];

impl TwaManifest {
    /// Builds the manifest from package settings and the optional signing key.
    ///
    /// # Errors
    ///
    /// Fails when `settings.host` is not an absolute URL with a host.
    pub fn from_settings(
        settings: &PackageSettings,
        signing_key: Option<&SigningKeyInfo>,
        normalizer: &ShortcutNormalizer,
    ) -> Result<Self> {
        let host = host_authority(&settings.host)?;

        let signing_key = signing_key
            .map(|key| SigningKeyRef {
                path: key.key_file_path.to_string_lossy().into_owned(),
                alias: key.alias.clone(),
            })
            .unwrap_or_default();

        let shortcuts =
            normalizer.normalize(&settings.shortcuts, settings.web_manifest_url.as_deref());

        let Value::Object(mut fields) = serde_json::to_value(settings)? else {
            crate::bail!("package settings did not serialize to a JSON object");
        };
        for key in REWRITTEN_KEYS {
            fields.remove(key);
        }

        let manifest = Self {
            package_id: settings.package_id.clone(),
            host,
            name: settings.name.clone(),
            launcher_name: settings.launcher_name.clone(),
            shortcuts,
            signing_key,
            generator_app: GENERATOR_APP.to_string(),
            fields,
        };

        log::debug!("TWA manifest created: {:?}", manifest);
        Ok(manifest)
    }

    /// Pretty JSON as written to `twa-manifest.json`.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reduces a site URL to its authority.
///
/// The scaffolder expects `example.com`, not `https://example.com/path`.
/// Default ports are dropped, others kept (`example.com:8443`).
pub fn host_authority(host: &str) -> Result<String> {
    let url = Url::parse(host.trim()).map_err(|error| Error::InvalidUrl {
        url: host.to_string(),
        error,
    })?;

    let name = url
        .host_str()
        .with_context(|| format!("host URL {host:?} has no host component"))?;

    Ok(match url.port() {
        Some(port) => format!("{name}:{port}"),
        None => name.to_string(),
    })
}
