//! リソース名の導出
//!
//! bootstrap と deploy の両方がここを通すことで、同じ名前が生成されることを保証します。

use crate::stage::{Microstack, Stage};

/// Pulumi のステートバケット名の接頭辞
pub const STATE_BUCKET_PREFIX: &str = "pulumi-state";

/// ステートバケット名: `pulumi-state-{environment}-{customer}`
pub fn bucket_name(environment: &str, customer: &str) -> String {
    format!("{}-{}-{}", STATE_BUCKET_PREFIX, environment, customer)
}

/// Pulumi スタック名: `{customer}-{stage}-{microstack}-{region}`
pub fn stack_name(customer: &str, stage: Stage, microstack: Microstack, region: &str) -> String {
    format!("{}-{}-{}-{}", customer, stage, microstack, region)
}

/// `pulumi login` に渡す S3 バックエンド URL
pub fn backend_url(bucket: &str) -> String {
    format!("s3://{}", bucket)
}
