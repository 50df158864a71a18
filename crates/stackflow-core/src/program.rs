//! Pulumi プログラム側のステージルーター
//!
//! CLI が子プロセスに渡す `CONFIG_FILE` と Pulumi config の `microstack` から
//! 対象ステージを決め、microstack ごとのデプロイ関数に振り分けます。
//! 各デプロイ関数はまだリソースを作成しません。

use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::stage::{Microstack, Stage};
use std::path::Path;

/// CLI が子プロセスに設定する設定ファイルパスの環境変数
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// microstack 名を保持する Pulumi config のキー
pub const MICROSTACK_CONFIG_KEY: &str = "microstack";

/// 1 回のプログラム実行で扱う対象
#[derive(Debug, Clone)]
pub struct ProgramContext {
    pub config: Config,
    pub microstack: Microstack,
}

impl ProgramContext {
    /// `CONFIG_FILE` 環境変数から設定を読み込む
    pub fn from_env(microstack: Option<&str>) -> Result<Self> {
        let config_file = std::env::var(CONFIG_FILE_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(CoreError::MissingConfigFileEnv)?;
        Self::resolve(config_file, microstack)
    }

    pub fn resolve(config_file: impl AsRef<Path>, microstack: Option<&str>) -> Result<Self> {
        let config = Config::load(config_file)?;
        let microstack = microstack
            .filter(|m| !m.is_empty())
            .ok_or(CoreError::MissingMicrostack)?
            .parse::<Microstack>()?;
        Ok(Self { config, microstack })
    }

    pub fn stage(&self) -> Stage {
        self.microstack.stage()
    }
}

/// ログ表示用のステージ名（不明な microstack は "unknown"）
pub fn stage_label(microstack: &str) -> &'static str {
    crate::stage::stage_for(microstack)
        .map(Stage::as_str)
        .unwrap_or("unknown")
}

/// ステージに応じたデプロイ関数を呼び出す
pub fn run(ctx: &ProgramContext) -> Result<()> {
    tracing::info!(
        "Deploying {} microstack in {} stage for customer: {}",
        ctx.microstack,
        ctx.stage(),
        ctx.config.customer
    );

    match ctx.stage() {
        Stage::Vpc => deploy_vpc_stage(ctx),
        Stage::Core => deploy_core_stage(ctx),
        Stage::Apps => deploy_apps_stage(ctx),
    }
}

fn deploy_vpc_stage(ctx: &ProgramContext) -> Result<()> {
    match ctx.microstack {
        Microstack::Networking => placeholder(ctx, "VPC, subnets and gateways"),
        Microstack::Acls => placeholder(ctx, "network ACLs"),
        other => Err(CoreError::UnknownMicrostack(other.to_string())),
    }
}

fn deploy_core_stage(ctx: &ProgramContext) -> Result<()> {
    match ctx.microstack {
        Microstack::S3 => placeholder(ctx, "S3 buckets"),
        Microstack::Route53 => placeholder(ctx, "Route53 zones"),
        Microstack::Rds => placeholder(ctx, "RDS instances"),
        Microstack::Eks => placeholder(ctx, "EKS cluster"),
        Microstack::OpenSearch => placeholder(ctx, "OpenSearch domain"),
        Microstack::CloudFront => placeholder(ctx, "CloudFront distributions"),
        Microstack::Certificates => placeholder(ctx, "ACM certificates"),
        other => Err(CoreError::UnknownMicrostack(other.to_string())),
    }
}

fn deploy_apps_stage(ctx: &ProgramContext) -> Result<()> {
    match ctx.microstack {
        Microstack::EksAddons => placeholder(ctx, "EKS add-ons"),
        Microstack::HelmCharts => placeholder(ctx, "Helm charts"),
        Microstack::StorageClasses => placeholder(ctx, "storage classes"),
        Microstack::IngressClasses => placeholder(ctx, "ingress classes"),
        other => Err(CoreError::UnknownMicrostack(other.to_string())),
    }
}

fn placeholder(ctx: &ProgramContext, resources: &str) -> Result<()> {
    tracing::info!(
        "{} ({}): {} not provisioned yet",
        ctx.microstack,
        ctx.config.environment,
        resources
    );
    Ok(())
}
