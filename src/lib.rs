//! Android package builder for web apps.
//!
//! This library turns a web app's package settings into a Trusted Web
//! Activity APK by orchestrating the external Android toolchain (project
//! generator, Gradle, zipalign, apksigner, keytool), and writes the Digital
//! Asset Links statement for signed builds.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
