mod commands;

use clap::{Args, Parser, Subcommand};
use stackflow_core::Stage;
use std::path::PathBuf;

const USAGE_EXAMPLES: &str = "\
例:
  stackflow init --config configs/sample-config.yaml
  stackflow vpc up --config configs/sample-config.yaml
  stackflow core preview --config configs/sample-config.yaml";

#[derive(Parser)]
#[command(name = "stackflow")]
#[command(about = "microstack 単位で Pulumi スタックを順番にデプロイする", long_about = None)]
#[command(after_help = USAGE_EXAMPLES)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// ステートバケットを作成し、全 microstack のスタックを初期化
    Init(TargetArgs),
    /// vpc ステージ (networking, acls)
    Vpc(StageArgs),
    /// core ステージ (s3, route53, rds, eks, opensearch, cloudfront, certificates)
    Core(StageArgs),
    /// apps ステージ (eks-addons, helm-charts, storage-classes, ingress-classes)
    Apps(StageArgs),
    /// バージョン情報を表示
    Version,
    /// Pulumi プログラムとして microstack をデプロイ（CONFIG_FILE を読む）
    #[command(hide = true)]
    Program {
        /// microstack 名 (networking, rds, helm-charts, ...)
        #[arg(long, env = "STACKFLOW_MICROSTACK")]
        microstack: Option<String>,
    },
}

/// 設定ファイルとリージョン
#[derive(Args, Debug)]
pub(crate) struct TargetArgs {
    /// インフラ設定ファイル (YAML)
    #[arg(long, value_name = "FILE")]
    config: PathBuf,
    /// AWS リージョン
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct StageArgs {
    /// Pulumi アクション (up, down, preview, ...)
    action: String,
    #[command(flatten)]
    target: TargetArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログは stderr に出力（RUST_LOG で調整、既定は info）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Version => {
            println!("stackflow {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Init(target) => {
            commands::init::handle(target).await?;
        }
        Commands::Vpc(args) => {
            commands::stage::handle(Stage::Vpc, args).await?;
        }
        Commands::Core(args) => {
            commands::stage::handle(Stage::Core, args).await?;
        }
        Commands::Apps(args) => {
            commands::stage::handle(Stage::Apps, args).await?;
        }
        Commands::Program { microstack } => {
            commands::program::handle(microstack.as_deref())?;
        }
    }

    Ok(())
}
