//! Shared helpers for the package pipeline.

pub mod fs;
