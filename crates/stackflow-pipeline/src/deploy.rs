//! Stage deploy: run one pulumi action over every microstack of a stage
//!
//! Strictly sequential and fail-fast. The first failing command ends the run
//! and later microstacks are not touched.

use crate::error::{PipelineError, Result, Step};
use stackflow_cloud::{Action, CommandRunner, Pulumi};
use stackflow_core::{
    CONFIG_FILE_ENV, Config, MICROSTACK_CONFIG_KEY, Microstack, Stage, backend_url,
    resolve_region,
};
use std::path::Path;

/// What to deploy
#[derive(Debug, Clone)]
pub struct DeployRequest<'a> {
    pub config: &'a Config,
    /// Passed to the pulumi program through `CONFIG_FILE`
    pub config_file: &'a Path,
    pub region: &'a str,
    pub stage: Stage,
    pub action: &'a Action,
}

#[derive(Debug, Clone)]
pub struct DeployReport {
    pub stage: Stage,
    pub action: String,
    /// (microstack, stack name) in completion order
    pub completed: Vec<(Microstack, String)>,
}

pub async fn deploy_stage<R>(request: &DeployRequest<'_>, runner: &R) -> Result<DeployReport>
where
    R: CommandRunner + ?Sized,
{
    let region = resolve_region(Some(request.region))?;
    let config = request.config;
    let stage = request.stage;

    let pulumi = Pulumi::new(runner).with_env(
        CONFIG_FILE_ENV,
        request.config_file.to_string_lossy().into_owned(),
    );

    let backend_url = backend_url(&config.bucket_name());
    tracing::info!("Logging into S3 backend: {}", backend_url);
    pulumi
        .login(&backend_url)
        .await
        .map_err(|source| PipelineError::Login {
            backend: backend_url.clone(),
            source,
        })?;

    let microstacks = stage.microstacks();
    tracing::info!(
        "Deploying stage: {} with action: {}",
        stage,
        request.action
    );
    tracing::info!(
        "Microstacks to process: {}",
        microstacks
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut report = DeployReport {
        stage,
        action: request.action.to_string(),
        completed: Vec::new(),
    };

    for microstack in microstacks {
        let stack = config.stack_name(*microstack, &region);
        tracing::info!("Processing microstack: {} ({})", microstack, stack);

        let fail = |step: Step| {
            let stack = stack.clone();
            move |source| PipelineError::Microstack {
                microstack: *microstack,
                stack,
                step,
                source,
            }
        };

        pulumi
            .stack_select(&stack)
            .await
            .map_err(fail(Step::Select))?;
        pulumi
            .config_set(MICROSTACK_CONFIG_KEY, microstack.as_str())
            .await
            .map_err(fail(Step::ConfigSet))?;
        pulumi
            .run_action(request.action)
            .await
            .map_err(fail(Step::Action))?;

        tracing::info!("Completed {} {}", microstack, request.action);
        report.completed.push((*microstack, stack));
    }

    Ok(report)
}
