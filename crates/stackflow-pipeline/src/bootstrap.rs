//! One-time setup: state bucket, backend login and one pulumi stack per microstack
//!
//! Safe to re-run. The bucket is created only when missing, and a failing
//! `stack init` (usually "already exists") is logged and skipped.

use crate::error::{PipelineError, Result};
use stackflow_cloud::{CommandRunner, Pulumi, StateBackend};
use stackflow_core::{Config, Stage, backend_url, resolve_region};

/// Outcome of a bootstrap run
#[derive(Debug, Clone, Default)]
pub struct BootstrapReport {
    pub bucket: String,
    pub bucket_created: bool,
    /// Stacks `pulumi stack init` succeeded for
    pub initialized: Vec<String>,
    /// Stacks whose init failed and were skipped
    pub skipped: Vec<String>,
}

impl BootstrapReport {
    pub fn total_stacks(&self) -> usize {
        self.initialized.len() + self.skipped.len()
    }
}

pub async fn bootstrap<B, R>(
    config: &Config,
    region: &str,
    backend: &B,
    runner: &R,
) -> Result<BootstrapReport>
where
    B: StateBackend + ?Sized,
    R: CommandRunner + ?Sized,
{
    let region = resolve_region(Some(region))?;
    let bucket = config.bucket_name();
    let mut report = BootstrapReport {
        bucket: bucket.clone(),
        ..Default::default()
    };

    tracing::info!("Ensuring S3 state bucket: {}", bucket);
    let state_err = |source| PipelineError::StateBucket {
        bucket: bucket.clone(),
        source,
    };

    if backend.bucket_exists(&bucket).await.map_err(state_err)? {
        tracing::info!("S3 bucket already exists: {}", bucket);
    } else {
        backend.create_bucket(&bucket).await.map_err(state_err)?;
        report.bucket_created = true;
    }
    backend.enable_versioning(&bucket).await.map_err(state_err)?;

    let backend_url = backend_url(&bucket);
    tracing::info!("Configuring pulumi backend: {}", backend_url);
    let pulumi = Pulumi::new(runner);
    pulumi
        .login(&backend_url)
        .await
        .map_err(|source| PipelineError::Login {
            backend: backend_url.clone(),
            source,
        })?;

    for stage in Stage::ALL {
        for microstack in stage.microstacks() {
            let stack = config.stack_name(*microstack, &region);
            tracing::info!("Creating stack: {}", stack);

            match pulumi.stack_init(&stack).await {
                Ok(()) => report.initialized.push(stack),
                Err(e) => {
                    tracing::warn!("Stack {} may already exist, continuing... ({})", stack, e);
                    report.skipped.push(stack);
                }
            }
        }
    }

    Ok(report)
}
