//! pulumi CLI wrapper
//!
//! Wraps the handful of pulumi subcommands StackFlow needs. The exit status
//! is the only success signal; output goes straight to the terminal.

use crate::error::{CloudError, Result};
use crate::runner::{CommandRunner, Invocation};
use std::fmt;

pub const PULUMI_BIN: &str = "pulumi";

/// pulumi CLI wrapper
pub struct Pulumi<R> {
    runner: R,
    envs: Vec<(String, String)>,
}

impl<R: CommandRunner> Pulumi<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            envs: Vec::new(),
        }
    }

    /// Set an environment variable on every pulumi process spawned by this wrapper
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// `pulumi login <backend>`
    pub async fn login(&self, backend_url: &str) -> Result<()> {
        self.run_command(&["login", backend_url]).await
    }

    /// `pulumi stack init <stack>`
    pub async fn stack_init(&self, stack: &str) -> Result<()> {
        self.run_command(&["stack", "init", stack]).await
    }

    /// `pulumi stack select <stack>`
    pub async fn stack_select(&self, stack: &str) -> Result<()> {
        self.run_command(&["stack", "select", stack]).await
    }

    /// `pulumi config set <key> <value>` on the selected stack
    pub async fn config_set(&self, key: &str, value: &str) -> Result<()> {
        self.run_command(&["config", "set", key, value]).await
    }

    /// `pulumi <action>` on the selected stack
    pub async fn run_action(&self, action: &Action) -> Result<()> {
        let args = action.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.run_command(&args).await
    }

    async fn run_command(&self, args: &[&str]) -> Result<()> {
        let mut invocation = Invocation::new(PULUMI_BIN).args(args.iter().copied());
        for (key, value) in &self.envs {
            invocation = invocation.env(key.as_str(), value.as_str());
        }

        let status = self.runner.run(&invocation).await?;
        if !status.is_success() {
            return Err(CloudError::CommandFailed {
                command: invocation.to_string(),
                code: status.code,
            });
        }
        Ok(())
    }
}

/// Stack action requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Preview,
    /// Any other verb, passed to pulumi as-is
    Other(String),
}

impl Action {
    pub fn parse(verb: &str) -> Self {
        match verb {
            "up" => Action::Up,
            "down" => Action::Down,
            "preview" => Action::Preview,
            other => Action::Other(other.to_string()),
        }
    }

    pub fn verb(&self) -> &str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Preview => "preview",
            Action::Other(verb) => verb,
        }
    }

    /// Arguments for pulumi; `up` and `down` skip the interactive confirmation
    pub fn args(&self) -> Vec<String> {
        match self {
            Action::Up | Action::Down => vec![self.verb().to_string(), "--yes".to_string()],
            _ => vec![self.verb().to_string()],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
