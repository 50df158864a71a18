//! Cloud collaborator error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("{0} not found on PATH. Please install: https://www.pulumi.com/docs/install/")]
    ToolNotFound(String),

    #[error("Command failed: `{command}` (exit code: {})", .code.map_or("signal".to_string(), |c| c.to_string()))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("S3 {operation} failed for bucket {bucket}: {message}")]
    Storage {
        operation: &'static str,
        bucket: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
