//! Signing configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the package should be signed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningMode {
    /// Produce an unsigned, aligned APK.
    #[default]
    None,
    /// Generate a fresh key store, then sign with it.
    New,
    /// Sign with a key store that already exists.
    Existing,
}

/// Key store location, credentials and key holder identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningKeyInfo {
    /// Path to the key store file.
    pub key_file_path: PathBuf,
    pub store_password: String,
    pub key_password: String,
    pub alias: String,

    /// Key holder identity, used when generating a new key.
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub organizational_unit: String,
    /// Two letter country code.
    #[serde(default)]
    pub country_code: String,
}

/// Where the signing key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Create the key store before signing, overwriting any existing file.
    New,
    /// Use the key store as is.
    Existing,
}

/// Resolved signing decision for a build.
///
/// Derived once from [`SigningMode`] and the optional [`SigningKeyInfo`] so the
/// pipeline only deals with two exhaustive cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signing {
    Unsigned,
    Signed {
        key_source: KeySource,
        key: SigningKeyInfo,
    },
}

impl Signing {
    /// Combines the requested mode with the supplied key.
    ///
    /// A signing mode without a key (or `none` with a key) yields
    /// [`Signing::Unsigned`].
    pub fn resolve(mode: SigningMode, key: Option<SigningKeyInfo>) -> Self {
        match (mode, key) {
            (SigningMode::None, _) | (_, None) => Signing::Unsigned,
            (SigningMode::New, Some(key)) => Signing::Signed {
                key_source: KeySource::New,
                key,
            },
            (SigningMode::Existing, Some(key)) => Signing::Signed {
                key_source: KeySource::Existing,
                key,
            },
        }
    }

    /// The signing key, if the build is signed.
    pub fn key(&self) -> Option<&SigningKeyInfo> {
        match self {
            Signing::Unsigned => None,
            Signing::Signed { key, .. } => Some(key),
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Signing::Signed { .. })
    }
}
