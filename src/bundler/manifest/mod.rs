//! Manifest shaping for the project scaffolder.
//!
//! - [`twa`] - settings to `twa-manifest.json` translation
//! - [`shortcuts`] - shortcut validation and normalization
//! - [`icons`] - icon selection used by shortcut validation

pub mod icons;
pub mod shortcuts;
pub mod twa;

pub use icons::find_suitable_icon;
pub use shortcuts::{
    IconSelector, MAX_SHORTCUTS, ShortcutDescriptor, ShortcutNormalizer, normalize_shortcuts,
};
pub use twa::{GENERATOR_APP, SigningKeyRef, TwaManifest, host_authority};
