//! Pulumi state bucket
//!
//! Three operations are needed against object storage: existence check, create and
//! enable versioning. [`S3StateBackend`] implements them with the AWS SDK.

use crate::error::{CloudError, Result};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{
    BucketLocationConstraint, BucketVersioningStatus, CreateBucketConfiguration,
    VersioningConfiguration,
};

/// Object storage holding the pulumi state
#[async_trait]
pub trait StateBackend: Send + Sync {
    /// Whether the bucket already exists
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    async fn create_bucket(&self, bucket: &str) -> Result<()>;

    async fn enable_versioning(&self, bucket: &str) -> Result<()>;
}

/// S3 implementation of [`StateBackend`]
pub struct S3StateBackend {
    client: Client,
    region: String,
}

impl S3StateBackend {
    /// Build a client from the default credential chain, pinned to `region`
    pub async fn connect(region: impl Into<String>) -> Self {
        let region = region.into();
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .load()
            .await;

        tracing::debug!("AWS config loaded for region {}", region);

        Self {
            client: Client::new(&config),
            region,
        }
    }

    pub fn from_client(client: Client, region: impl Into<String>) -> Self {
        Self {
            client,
            region: region.into(),
        }
    }
}

/// LocationConstraint for CreateBucket; us-east-1 must not send one
pub fn location_constraint(region: &str) -> Option<&str> {
    if region == "us-east-1" {
        None
    } else {
        Some(region)
    }
}

fn storage_error<E>(operation: &'static str, bucket: &str, err: E) -> CloudError
where
    E: std::error::Error,
{
    CloudError::Storage {
        operation,
        bucket: bucket.to_string(),
        message: DisplayErrorContext(&err).to_string(),
    }
}

#[async_trait]
impl StateBackend for S3StateBackend {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.client.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(storage_error("HeadBucket", bucket, service_err))
                }
            }
        }
    }

    async fn create_bucket(&self, bucket: &str) -> Result<()> {
        let mut request = self.client.create_bucket().bucket(bucket);

        if let Some(constraint) = location_constraint(&self.region) {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(constraint))
                    .build(),
            );
        }

        request
            .send()
            .await
            .map_err(|e| storage_error("CreateBucket", bucket, e))?;

        tracing::info!("Created S3 bucket: {}", bucket);
        Ok(())
    }

    async fn enable_versioning(&self, bucket: &str) -> Result<()> {
        self.client
            .put_bucket_versioning()
            .bucket(bucket)
            .versioning_configuration(
                VersioningConfiguration::builder()
                    .status(BucketVersioningStatus::Enabled)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| storage_error("PutBucketVersioning", bucket, e))?;

        tracing::debug!("Versioning enabled on {}", bucket);
        Ok(())
    }
}
