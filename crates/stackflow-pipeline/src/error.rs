//! Pipeline error types

use stackflow_cloud::CloudError;
use stackflow_core::{CoreError, Microstack};
use std::fmt;
use thiserror::Error;

/// Step of the per-microstack deploy sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Select,
    ConfigSet,
    Action,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Select => write!(f, "select stack"),
            Step::ConfigSet => write!(f, "set microstack config"),
            Step::Action => write!(f, "run action"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("State bucket {bucket}: {source}")]
    StateBucket {
        bucket: String,
        #[source]
        source: CloudError,
    },

    #[error("Failed to log into pulumi backend {backend}: {source}")]
    Login {
        backend: String,
        #[source]
        source: CloudError,
    },

    #[error("Microstack {microstack} ({stack}): failed to {step}: {source}")]
    Microstack {
        microstack: Microstack,
        stack: String,
        step: Step,
        #[source]
        source: CloudError,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
