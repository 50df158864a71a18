//! インフラ設定ファイル（YAML）の読み込み

use crate::error::{CoreError, Result};
use crate::naming;
use crate::stage::Microstack;
use serde::Deserialize;
use std::path::Path;

/// インフラ設定
///
/// `environment` と `customer` 以外のキーは無視されます。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub environment: String,
    pub customer: String,
}

impl Config {
    /// ファイルから読み込む
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;

        tracing::debug!(
            "Loaded config from {}: environment={}, customer={}",
            path.display(),
            config.environment,
            config.customer
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.environment.trim().is_empty() {
            return Err(CoreError::MissingField("environment"));
        }
        if self.customer.trim().is_empty() {
            return Err(CoreError::MissingField("customer"));
        }
        Ok(())
    }

    pub fn bucket_name(&self) -> String {
        naming::bucket_name(&self.environment, &self.customer)
    }

    pub fn stack_name(&self, microstack: Microstack, region: &str) -> String {
        naming::stack_name(&self.customer, microstack.stage(), microstack, region)
    }
}

/// リージョン指定を検証する（未指定・空文字はエラー）
pub fn resolve_region(region: Option<&str>) -> Result<String> {
    match region.map(str::trim) {
        Some(r) if !r.is_empty() => Ok(r.to_string()),
        _ => Err(CoreError::MissingRegion),
    }
}
