use colored::Colorize;
use stackflow_cloud::{ProcessRunner, S3StateBackend};
use stackflow_core::{Config, resolve_region};

use super::super::TargetArgs;

pub async fn handle(target: TargetArgs) -> anyhow::Result<()> {
    println!("{}", "インフラを初期化しています...".blue().bold());

    // リモート呼び出しの前に設定とリージョンを確定させる
    let config = Config::load(&target.config)?;
    let region = resolve_region(target.region.as_deref())?;

    println!("  設定: {}", target.config.display().to_string().cyan());
    println!("  顧客: {} / 環境: {}", config.customer.cyan(), config.environment.cyan());
    println!("  リージョン: {}", region.cyan());

    tracing::info!(
        "Loaded {} (customer: {}, environment: {})",
        target.config.display(),
        config.customer,
        config.environment
    );
    let backend = S3StateBackend::connect(region.as_str()).await;
    let report = stackflow_pipeline::bootstrap(&config, &region, &backend, &ProcessRunner).await?;

    println!();
    if report.bucket_created {
        println!("  ✓ S3 ステートバケットを作成しました: {}", report.bucket.cyan());
    } else {
        println!("  ✓ S3 ステートバケットは既に存在します: {}", report.bucket.cyan());
    }
    println!(
        "  ✓ スタック初期化: {} 個作成 / {} 個スキップ",
        report.initialized.len(),
        report.skipped.len()
    );
    for stack in &report.skipped {
        println!("    {} {} (既に存在する可能性があります)", "-".yellow(), stack);
    }

    println!();
    println!("{}", "✓ 初期化が完了しました！".green().bold());
    Ok(())
}
