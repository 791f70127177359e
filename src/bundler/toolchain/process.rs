//! External tool invocation.
//!
//! Every toolchain step runs through [`ToolCommand`], which logs the command
//! line with secrets redacted and turns spawn failures and non-zero exits into
//! [`Error::CommandFailed`] and [`Error::ToolFailed`].

use crate::bundler::{Error, Result};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Output,
};

const REDACTED: &str = "******";

/// Builder for a single external tool run.
pub struct ToolCommand {
    tool: &'static str,
    program: PathBuf,
    args: Vec<(OsString, bool)>,
    envs: Vec<(String, OsString)>,
    current_dir: Option<PathBuf>,
}

impl ToolCommand {
    /// `tool` names the step in errors and logs; `program` is what gets spawned.
    pub fn new(tool: &'static str, program: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push((arg.into(), false));
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args
            .extend(args.into_iter().map(|arg| (arg.into(), false)));
        self
    }

    /// Adds an argument that must never appear in logs (passwords).
    pub fn secret_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push((arg.into(), true));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Command line with secret arguments replaced.
    pub fn display(&self) -> String {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().map(|(arg, secret)| {
                if *secret {
                    REDACTED.to_string()
                } else {
                    arg.to_string_lossy().into_owned()
                }
            }))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the command to completion and captures its output.
    ///
    /// # Errors
    ///
    /// - [`Error::CommandFailed`] if the process cannot be spawned
    /// - [`Error::ToolFailed`] if it exits unsuccessfully
    pub async fn run(self) -> Result<Output> {
        log::debug!("Running {}", self.display());

        let mut command = tokio::process::Command::new(&self.program);
        command.args(self.args.iter().map(|(arg, _)| arg));
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|error| Error::CommandFailed {
            command: self.tool.to_string(),
            error,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(Error::ToolFailed {
                tool: self.tool.to_string(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_redacted_in_display() {
        let command = ToolCommand::new("apksigner", "apksigner")
            .args(["sign", "--ks-pass"])
            .secret_arg("pass:hunter2")
            .arg("app.apk");
        assert_eq!(
            command.display(),
            "apksigner sign --ks-pass ****** app.apk"
        );
    }

    #[tokio::test]
    async fn missing_program_is_command_failed() {
        let err = ToolCommand::new("zipalign", "/nonexistent/bin/zipalign")
            .run()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { ref command, .. } if command == "zipalign"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_keeps_stderr() {
        let err = ToolCommand::new("gradle", "sh")
            .args(["-c", "echo 'build broke' >&2; exit 3"])
            .run()
            .await
            .unwrap_err();
        match err {
            Error::ToolFailed { tool, stderr, .. } => {
                assert_eq!(tool, "gradle");
                assert_eq!(stderr, "build broke");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn success_returns_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = ToolCommand::new("pwd", "sh")
            .args(["-c", "printf \"$GREETING\""])
            .env("GREETING", "hello")
            .current_dir(dir.path())
            .run()
            .await
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "hello");
    }
}
