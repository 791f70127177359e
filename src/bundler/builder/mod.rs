//! Package build orchestration.
//!
//! This module provides the [`PackageBuilder`] that runs the external
//! toolchain in order and reports the resulting [`PackageResult`].
//!
//! # Module Organization
//!
//! - [`artifact`] - typed stage outputs and the final [`PackageResult`]
//! - [`checksum`] - SHA256 checksum calculation for the final APK
//! - [`orchestrator`] - Main [`PackageBuilder`] struct and pipeline stages

pub mod artifact;
mod checksum;
mod orchestrator;

pub use artifact::{AlignedApk, CompiledApk, PackageResult, ScaffoldedProject, SignedApk};
pub use checksum::{ArtifactDigest, digest_file};
pub use orchestrator::PackageBuilder;
