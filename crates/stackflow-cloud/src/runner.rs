//! Subprocess execution
//!
//! All external commands go through [`CommandRunner`] so orchestration code
//! can be exercised without the real tool installed.

use crate::error::{CloudError, Result};
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use tokio::process::Command;

/// A single external command: program, arguments and extra environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Look up an environment variable set on this invocation
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.envs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn failure(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<CommandStatus>;
}

#[async_trait]
impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    async fn run(&self, invocation: &Invocation) -> Result<CommandStatus> {
        (**self).run(invocation).await
    }
}

/// Spawns real processes, streaming their output to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandStatus> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        cmd.envs(invocation.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        tracing::debug!("Running: {}", invocation);

        let status = cmd.status().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CloudError::ToolNotFound(invocation.program.clone())
            } else {
                CloudError::Io(e)
            }
        })?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display() {
        let inv = Invocation::new("pulumi")
            .args(["stack", "select", "acme-vpc-acls-us-east-1"])
            .env("CONFIG_FILE", "configs/acme.yaml");
        assert_eq!(inv.to_string(), "pulumi stack select acme-vpc-acls-us-east-1");
        assert_eq!(inv.env_value("CONFIG_FILE"), Some("configs/acme.yaml"));
        assert_eq!(inv.env_value("HOME"), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_runner_exit_codes() {
        let ok = ProcessRunner
            .run(&Invocation::new("sh").args(["-c", "exit 0"]))
            .await
            .unwrap();
        assert!(ok.is_success());

        let failed = ProcessRunner
            .run(&Invocation::new("sh").args(["-c", "exit 3"]))
            .await
            .unwrap();
        assert_eq!(failed, CommandStatus::failure(3));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_runner_passes_env() {
        let status = ProcessRunner
            .run(
                &Invocation::new("sh")
                    .args(["-c", "test \"$CONFIG_FILE\" = acme.yaml"])
                    .env("CONFIG_FILE", "acme.yaml"),
            )
            .await
            .unwrap();
        assert!(status.is_success());
    }

    #[tokio::test]
    async fn test_process_runner_missing_tool() {
        let result = ProcessRunner
            .run(&Invocation::new("stackflow-definitely-missing-binary"))
            .await;
        assert!(matches!(result, Err(CloudError::ToolNotFound(name)) if name == "stackflow-definitely-missing-binary"));
    }
}
