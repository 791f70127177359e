//! Error types for packaging operations.
//!
//! Every fallible operation in [`crate::bundler`] returns [`Result`]. Errors
//! from external tools keep the tool name and captured stderr so a failed
//! build surfaces the triggering message unchanged.

use std::{fmt::Display, io, path::PathBuf};

/// Result type alias for packaging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building an Android package.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Free-form error, usually raised through [`crate::bail!`].
    #[error("{0}")]
    GenericError(String),

    /// IO error without additional context.
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// Filesystem error with the operation and path that failed.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done when the error happened
        context: &'static str,
        /// Path involved in the operation
        path: PathBuf,
        /// Underlying IO error
        error: io::Error,
    },

    /// An external command could not be spawned.
    #[error("failed to run {command}: {error}")]
    CommandFailed {
        /// Command that could not be started
        command: String,
        /// Spawn error
        error: io::Error,
    },

    /// An external tool ran but exited unsuccessfully.
    #[error("{tool} failed ({status}): {stderr}")]
    ToolFailed {
        /// Tool name
        tool: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// A required external tool is not installed.
    #[error("{tool} not found: {hint}")]
    ToolNotFound {
        /// Tool name
        tool: String,
        /// How to make the tool available
        hint: String,
    },

    /// A URL could not be parsed or resolved.
    #[error("invalid URL `{url}`: {error}")]
    InvalidUrl {
        /// The offending input
        url: String,
        /// Parser error
        error: url::ParseError,
    },

    /// The key store listing did not contain a SHA-256 fingerprint.
    #[error("couldn't find SHA256 fingerprint for key alias `{alias}`")]
    MissingFingerprint {
        /// Key alias that was inspected
        alias: String,
    },

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error wrapped with a human readable context message.
    #[error("{0}: {1}")]
    Context(String, Box<dyn std::error::Error + Send + Sync>),
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Adds a context message to results and options.
pub trait Context<T> {
    /// Wraps the error (or `None`) with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Like [`Context::context`] but builds the message lazily.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

/// Returns early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:literal, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_names_operation_and_path() {
        let err = std::fs::read("/definitely/not/here.apk")
            .fs_context("reading artifact", "/definitely/not/here.apk")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("reading artifact /definitely/not/here.apk:"));
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let value: Option<u8> = None;
        let err = value.context("output directory is required").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "output directory is required"));
    }

    #[test]
    fn bail_formats_arguments() {
        fn fails(tool: &str) -> Result<()> {
            crate::bail!("{} exploded", tool);
        }
        assert_eq!(fails("zipalign").unwrap_err().to_string(), "zipalign exploded");
    }
}
