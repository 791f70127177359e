//! App shortcut validation and normalization.
//!
//! Web manifests list shortcuts with relative URLs and loosely specified
//! icons. Android launchers need absolute URLs, a short label and a single
//! icon, and show at most [`MAX_SHORTCUTS`] entries. Entries that cannot be
//! turned into a launcher shortcut are dropped with a warning; they never fail
//! the build.

use serde::{Deserialize, Serialize};
use url::Url;

use super::icons::{DEFAULT_PURPOSE, find_suitable_icon};
use crate::bundler::{IconEntry, ShortcutEntry};

/// Maximum number of shortcuts kept in the manifest.
pub const MAX_SHORTCUTS: usize = 4;

/// Maximum length of a derived short name, in characters.
pub const SHORT_NAME_MAX_CHARS: usize = 12;

/// Icon selection strategy: icon list and purpose to the chosen icon.
pub type IconSelector = for<'a, 'b> fn(&'a [IconEntry], &'b str) -> Option<&'a IconEntry>;

/// A validated launcher shortcut with absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutDescriptor {
    pub name: String,
    pub short_name: String,
    pub url: String,
    #[serde(rename = "chosenIconUrl")]
    pub icon_url: String,
}

impl From<&ShortcutDescriptor> for ShortcutEntry {
    fn from(shortcut: &ShortcutDescriptor) -> Self {
        ShortcutEntry {
            name: Some(shortcut.name.clone()),
            short_name: Some(shortcut.short_name.clone()),
            url: Some(shortcut.url.clone()),
            icons: Some(vec![IconEntry {
                src: shortcut.icon_url.clone(),
                purpose: Some(DEFAULT_PURPOSE.to_string()),
                ..Default::default()
            }]),
        }
    }
}

/// Turns raw manifest shortcuts into [`ShortcutDescriptor`]s.
#[derive(Clone, Copy)]
pub struct ShortcutNormalizer {
    select_icon: IconSelector,
}

impl Default for ShortcutNormalizer {
    fn default() -> Self {
        Self {
            select_icon: find_suitable_icon,
        }
    }
}

impl std::fmt::Debug for ShortcutNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShortcutNormalizer").finish_non_exhaustive()
    }
}

/// A shortcut that passed validation, borrowed from the raw entry.
struct ValidShortcut<'a> {
    name: &'a str,
    short_name: Option<&'a str>,
    url: &'a str,
    icon: &'a IconEntry,
}

impl ShortcutNormalizer {
    /// Creates a normalizer with a custom icon selection strategy.
    pub fn with_icon_selector(select_icon: IconSelector) -> Self {
        Self { select_icon }
    }

    /// Validates, maps and truncates `shortcuts`.
    ///
    /// Returns an empty list when `manifest_url` is missing, empty, or not an
    /// absolute URL, since relative shortcut URLs cannot be resolved. Every
    /// entry is validated before the result is cut to [`MAX_SHORTCUTS`], so the
    /// cap applies to valid entries, not raw ones.
    pub fn normalize(
        &self,
        shortcuts: &[Option<ShortcutEntry>],
        manifest_url: Option<&str>,
    ) -> Vec<ShortcutDescriptor> {
        let Some(manifest_url) = manifest_url.filter(|u| !u.trim().is_empty()) else {
            log::warn!("Skipping app shortcuts due to empty manifest URL");
            return Vec::new();
        };

        let base = match Url::parse(manifest_url) {
            Ok(base) => base,
            Err(e) => {
                log::warn!(
                    "Skipping app shortcuts: manifest URL {:?} is not absolute: {}",
                    manifest_url,
                    e
                );
                return Vec::new();
            }
        };

        let valid: Vec<ValidShortcut<'_>> = shortcuts
            .iter()
            .filter_map(|s| self.validate(s.as_ref()))
            .collect();

        let mut descriptors: Vec<ShortcutDescriptor> = valid
            .into_iter()
            .filter_map(|s| describe(s, &base))
            .collect();
        descriptors.truncate(MAX_SHORTCUTS);
        descriptors
    }

    fn validate<'a>(&self, shortcut: Option<&'a ShortcutEntry>) -> Option<ValidShortcut<'a>> {
        let Some(shortcut) = shortcut else {
            log::warn!("Shortcut is invalid due to being null");
            return None;
        };

        let Some(icons) = shortcut.icons.as_deref() else {
            log::warn!(
                "Shortcut is invalid due to not having any icons specified: {:?}",
                shortcut
            );
            return None;
        };

        let Some(url) = non_empty(&shortcut.url) else {
            log::warn!("Shortcut is invalid due to not having a URL: {:?}", shortcut);
            return None;
        };

        let short_name = non_empty(&shortcut.short_name);
        let Some(name) = non_empty(&shortcut.name).or(short_name) else {
            log::warn!(
                "Shortcut is invalid due to having neither a name nor short_name: {:?}",
                shortcut
            );
            return None;
        };

        let Some(icon) = (self.select_icon)(icons, DEFAULT_PURPOSE) else {
            log::warn!(
                "Shortcut is invalid due to not finding a suitable icon: {:?}",
                icons
            );
            return None;
        };

        Some(ValidShortcut {
            name,
            short_name,
            url,
            icon,
        })
    }
}

/// Convenience wrapper using the default icon selection.
pub fn normalize_shortcuts(
    shortcuts: &[Option<ShortcutEntry>],
    manifest_url: Option<&str>,
) -> Vec<ShortcutDescriptor> {
    ShortcutNormalizer::default().normalize(shortcuts, manifest_url)
}

fn describe(shortcut: ValidShortcut<'_>, base: &Url) -> Option<ShortcutDescriptor> {
    let short_name = match shortcut.short_name {
        Some(short_name) => short_name.to_string(),
        None => shortcut.name.chars().take(SHORT_NAME_MAX_CHARS).collect(),
    };

    let url = match base.join(shortcut.url) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Shortcut URL {:?} cannot be resolved: {}", shortcut.url, e);
            return None;
        }
    };

    let icon_url = match base.join(&shortcut.icon.src) {
        Ok(url) => url,
        Err(e) => {
            log::warn!(
                "Shortcut icon {:?} cannot be resolved: {}",
                shortcut.icon.src,
                e
            );
            return None;
        }
    };

    Some(ShortcutDescriptor {
        name: shortcut.name.to_string(),
        short_name,
        url: url.to_string(),
        icon_url: icon_url.to_string(),
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
