//! Configuration structures for package builds.
//!
//! This module provides the package metadata read from the caller's JSON
//! payload, the signing configuration, and the [`Settings`] aggregate (built
//! with [`SettingsBuilder`]) that the pipeline runs from.

mod builder;
mod core;
mod package;
mod signing;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use core::Settings;
pub use package::{IconEntry, PackageSettings, ShortcutEntry};
pub use signing::{KeySource, Signing, SigningKeyInfo, SigningMode};
