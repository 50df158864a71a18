//! Test doubles for the pulumi runner and the state bucket

use async_trait::async_trait;
use stackflow_cloud::{CommandRunner, CommandStatus, Invocation, StateBackend};
use std::collections::HashSet;
use std::sync::Mutex;

/// Records every invocation; fails those whose command line contains a pattern
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    fail_patterns: Vec<String>,
}

impl RecordingRunner {
    pub fn failing_on(patterns: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.to_string()).collect()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> stackflow_cloud::Result<CommandStatus> {
        self.calls.lock().unwrap().push(invocation.clone());
        let line = invocation.to_string();
        if self.fail_patterns.iter().any(|p| line.contains(p.as_str())) {
            Ok(CommandStatus::failure(255))
        } else {
            Ok(CommandStatus::success())
        }
    }
}

/// In-memory bucket store
#[derive(Default)]
pub struct MemoryBackend {
    pub buckets: Mutex<HashSet<String>>,
    pub created: Mutex<Vec<String>>,
    pub versioned: Mutex<Vec<String>>,
    pub fail_head: bool,
    pub fail_create: bool,
    pub fail_versioning: bool,
}

fn denied(operation: &'static str, bucket: &str) -> stackflow_cloud::CloudError {
    stackflow_cloud::CloudError::Storage {
        operation,
        bucket: bucket.to_string(),
        message: "AccessDenied".to_string(),
    }
}

impl MemoryBackend {
    pub fn with_bucket(bucket: &str) -> Self {
        let backend = Self::default();
        backend.buckets.lock().unwrap().insert(bucket.to_string());
        backend
    }
}

#[async_trait]
impl StateBackend for MemoryBackend {
    async fn bucket_exists(&self, bucket: &str) -> stackflow_cloud::Result<bool> {
        if self.fail_head {
            return Err(denied("HeadBucket", bucket));
        }
        Ok(self.buckets.lock().unwrap().contains(bucket))
    }

    async fn create_bucket(&self, bucket: &str) -> stackflow_cloud::Result<()> {
        if self.fail_create {
            return Err(denied("CreateBucket", bucket));
        }
        self.buckets.lock().unwrap().insert(bucket.to_string());
        self.created.lock().unwrap().push(bucket.to_string());
        Ok(())
    }

    async fn enable_versioning(&self, bucket: &str) -> stackflow_cloud::Result<()> {
        if self.fail_versioning {
            return Err(denied("PutBucketVersioning", bucket));
        }
        self.versioned.lock().unwrap().push(bucket.to_string());
        Ok(())
    }
}
