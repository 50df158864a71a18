//! StackFlow cloud collaborators
//!
//! This crate wraps the two external systems StackFlow talks to:
//!
//! - **pulumi CLI**: login, stack init/select, config set and stack actions,
//!   run as subprocesses through [`CommandRunner`]
//! - **S3**: the bucket holding pulumi state, behind [`StateBackend`]
//!
//! # Example
//!
//! ```ignore
//! use stackflow_cloud::{Action, ProcessRunner, Pulumi};
//!
//! let pulumi = Pulumi::new(ProcessRunner);
//! pulumi.login("s3://pulumi-state-prod-acme").await?;
//! pulumi.stack_select("acme-vpc-networking-us-east-1").await?;
//! pulumi.run_action(&Action::Preview).await?;
//! ```

pub mod backend;
pub mod error;
pub mod pulumi;
pub mod runner;

pub use backend::{S3StateBackend, StateBackend, location_constraint};
pub use error::{CloudError, Result};
pub use pulumi::{Action, PULUMI_BIN, Pulumi};
pub use runner::{CommandRunner, CommandStatus, Invocation, ProcessRunner};
