//! Adapter traits
//!
//! These traits are the seams between the export handler and the managed
//! services it talks to. Production implementations live alongside this
//! module; in-memory ones live in [`crate::testing`].

use crate::domain::{ExportPayload, Result, StorageKey};
use async_trait::async_trait;

/// Source of export payloads (the business layer)
#[async_trait]
pub trait ExportSource: Send + Sync {
    /// Relay a raw input message and return the export it produces
    ///
    /// # Errors
    ///
    /// - [`crate::domain::DbExportError::BusinessLayerUnreachable`] if the
    ///   call itself failed
    /// - [`crate::domain::DbExportError::BusinessLayer`] if the business layer
    ///   reported a failed export
    async fn fetch_export(&self, raw_message: &str) -> Result<ExportPayload>;
}

/// Object storage for export artifacts
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Write `payload` under `key`
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DbExportError::Storage`] if the upload failed.
    async fn put_artifact(&self, key: &StorageKey, payload: ExportPayload) -> Result<()>;
}

/// Queue that completion records are published to
#[async_trait]
pub trait CompletionPublisher: Send + Sync {
    /// Resolve a logical queue name to the address messages are sent to
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DbExportError::Notify`] if the queue cannot be found.
    async fn resolve_queue_url(&self, queue_name: &str) -> Result<String>;

    /// Send one message body to a resolved queue
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DbExportError::Notify`] if the send failed.
    async fn publish(&self, queue_url: &str, body: String) -> Result<()>;
}
