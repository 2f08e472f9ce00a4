//! S3 artifact store

use super::traits::ArtifactStore;
use crate::config::DbExportConfig;
use crate::domain::{DbExportError, ExportPayload, Result, StorageKey};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

/// Writes export payloads into the configured bucket
pub struct S3ArtifactStore {
    client: Client,
    bucket: String,
}

impl S3ArtifactStore {
    /// Create a store for the configured bucket
    pub fn new(client: Client, config: &DbExportConfig) -> Self {
        Self {
            client,
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put_artifact(&self, key: &StorageKey, payload: ExportPayload) -> Result<()> {
        let bytes = payload.len();

        tracing::debug!(bucket = %self.bucket, key = %key, bytes, "Uploading export");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .body(ByteStream::from(payload.into_bytes()))
            .send()
            .await
            .map_err(|e| {
                DbExportError::Storage(format!(
                    "Unable to upload {key} to {}: {}",
                    self.bucket,
                    DisplayErrorContext(&e)
                ))
            })?;

        tracing::info!(bucket = %self.bucket, key = %key, bytes, "Successfully uploaded export");
        Ok(())
    }
}
