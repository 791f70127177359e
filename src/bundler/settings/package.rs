//! Web app package settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::SigningMode;

/// Package metadata describing the web app to wrap.
///
/// Mirrors the JSON payload produced by the packaging front end (camelCase
/// keys). Fields the bundler does not interpret are kept in [`extra`] and
/// passed through to the generated manifest unchanged.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_android::bundler::{PackageSettings, SigningMode};
///
/// let settings: PackageSettings = serde_json::from_str(r#"{
///     "packageId": "com.example.twa",
///     "host": "https://example.com",
///     "name": "Example",
///     "launcherName": "Example",
///     "webManifestUrl": "https://example.com/manifest.json",
///     "signingMode": "new"
/// }"#).unwrap();
///
/// assert_eq!(settings.package_id, "com.example.twa");
/// assert_eq!(settings.signing_mode, SigningMode::New);
/// ```
///
/// [`extra`]: PackageSettings::extra
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSettings {
    /// Android application id, e.g. `com.example.twa`.
    pub package_id: String,

    /// URL of the site the app opens. Only its authority ends up in the manifest.
    pub host: String,

    /// Full application name.
    pub name: String,

    /// Name shown under the launcher icon.
    #[serde(default)]
    pub launcher_name: String,

    /// User facing version, e.g. "1.0.0".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,

    /// Monotonic Android version code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version_code: Option<u32>,

    /// Path opened on launch, relative to the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_color_dark: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_divider_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_divider_color_dark: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Display mode: `standalone`, `fullscreen`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maskable_icon_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monochrome_icon_url: Option<String>,

    /// Splash screen fade out in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash_screen_fade_out_duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_notifications: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_site_settings_shortcut: Option<bool>,

    /// Fallback when the browser lacks TWA support: `customtabs` or `webview`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_scope_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sdk_version: Option<u32>,

    #[serde(
        default,
        rename = "isChromeOSOnly",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_chrome_os_only: Option<bool>,

    /// Raw `shortcuts` array from the web manifest. Entries may be `null`.
    #[serde(default)]
    pub shortcuts: Vec<Option<ShortcutEntry>>,

    /// URL of the web manifest, used to resolve relative shortcut URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_manifest_url: Option<String>,

    /// How the package should be signed.
    #[serde(default)]
    pub signing_mode: SigningMode,

    /// Any other manifest fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A shortcut entry as it appears in a web manifest.
///
/// Nothing here is trusted: every field may be missing or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<IconEntry>>,
}

/// An icon declared in a web manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconEntry {
    #[serde(default)]
    pub src: String,

    /// Space separated `WxH` tokens, e.g. `"96x96 192x192"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,

    /// Space separated purposes. Absent means `any`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}
