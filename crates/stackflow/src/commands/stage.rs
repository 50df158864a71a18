use colored::Colorize;
use stackflow_cloud::{Action, ProcessRunner};
use stackflow_core::{Config, Stage, resolve_region};
use stackflow_pipeline::DeployRequest;

use super::super::StageArgs;

pub async fn handle(stage: Stage, args: StageArgs) -> anyhow::Result<()> {
    let target = args.target;

    let config = Config::load(&target.config)?;
    let region = resolve_region(target.region.as_deref())?;
    let action = Action::parse(&args.action);
    tracing::info!(
        "Loaded {} (customer: {}, environment: {}, region: {})",
        target.config.display(),
        config.customer,
        config.environment,
        region
    );

    println!(
        "{}",
        format!("ステージ '{}' に '{}' を実行します", stage, action)
            .blue()
            .bold()
    );
    let names: Vec<&str> = stage.microstacks().iter().map(|m| m.as_str()).collect();
    println!("  microstack: {}", names.join(", ").cyan());

    let request = DeployRequest {
        config: &config,
        config_file: &target.config,
        region: &region,
        stage,
        action: &action,
    };
    let report = stackflow_pipeline::deploy_stage(&request, &ProcessRunner).await?;

    println!();
    for (microstack, stack) in &report.completed {
        println!("  {} {} ({})", "✓".green(), microstack.to_string().cyan(), stack);
    }
    println!();
    println!(
        "{}",
        format!(
            "✓ ステージ '{}' の {} が完了しました！",
            report.stage, report.action
        )
            .green()
            .bold()
    );
    Ok(())
}
