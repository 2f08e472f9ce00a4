//! In-memory adapters for exercising the export handler without AWS.
//!
//! # Usage
//!
//! ```rust
//! use dbexport::testing::{MemoryArtifactStore, RecordingPublisher, StaticExportSource};
//!
//! let source = StaticExportSource::payload("DATA");
//! let store = MemoryArtifactStore::new();
//! let publisher = RecordingPublisher::new();
//! assert!(publisher.records().is_empty());
//! ```

use crate::adapters::{ArtifactStore, CompletionPublisher, ExportSource};
use crate::domain::{
    CompletionRecord, DbExportError, ExportPayload, Result, StorageKey,
    BUSINESS_LAYER_ERROR_MARKER,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone)]
enum SourceBehavior {
    Payload(String),
    Unreachable,
    BusinessError,
}

/// Export source answering every request the same way
#[derive(Debug)]
pub struct StaticExportSource {
    behavior: SourceBehavior,
    requests: Mutex<Vec<String>>,
}

impl StaticExportSource {
    fn with_behavior(behavior: SourceBehavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always return `body`
    pub fn payload(body: impl Into<String>) -> Self {
        Self::with_behavior(SourceBehavior::Payload(body.into()))
    }

    /// Always fail as if the endpoint could not be reached
    pub fn unreachable() -> Self {
        Self::with_behavior(SourceBehavior::Unreachable)
    }

    /// Always answer with the business layer's failure marker
    pub fn business_error() -> Self {
        Self::with_behavior(SourceBehavior::BusinessError)
    }

    /// Raw messages received so far
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl ExportSource for StaticExportSource {
    async fn fetch_export(&self, raw_message: &str) -> Result<ExportPayload> {
        lock(&self.requests).push(raw_message.to_string());

        match &self.behavior {
            SourceBehavior::Payload(body) => Ok(ExportPayload::new(body.clone())),
            SourceBehavior::Unreachable => Err(DbExportError::BusinessLayerUnreachable(
                "connection refused".to_string(),
            )),
            SourceBehavior::BusinessError => Err(DbExportError::BusinessLayer(format!(
                "response contained '{BUSINESS_LAYER_ERROR_MARKER}'"
            ))),
        }
    }
}

/// Artifact store keeping uploads in memory
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    objects: Mutex<Vec<(String, Vec<u8>)>>,
    fail: bool,
}

impl MemoryArtifactStore {
    /// Store accepting every upload
    pub fn new() -> Self {
        Self::default()
    }

    /// Store rejecting every upload
    pub fn failing() -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Uploaded `(key, bytes)` pairs in upload order
    pub fn objects(&self) -> Vec<(String, Vec<u8>)> {
        lock(&self.objects).clone()
    }
}

#[async_trait]
impl ArtifactStore for MemoryArtifactStore {
    async fn put_artifact(&self, key: &StorageKey, payload: ExportPayload) -> Result<()> {
        if self.fail {
            return Err(DbExportError::Storage(format!("Access denied writing {key}")));
        }
        lock(&self.objects).push((key.to_string(), payload.into_bytes()));
        Ok(())
    }
}

/// Completion publisher recording every message it is asked to send
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    published: Mutex<Vec<(String, String)>>,
    resolve_calls: AtomicUsize,
    fail_resolution: bool,
    fail_publish: bool,
}

impl RecordingPublisher {
    /// Publisher accepting every message
    pub fn new() -> Self {
        Self::default()
    }

    /// Publisher that cannot find any queue
    pub fn failing_resolution() -> Self {
        Self {
            fail_resolution: true,
            ..Self::default()
        }
    }

    /// Publisher that finds queues but rejects every send
    pub fn failing_publish() -> Self {
        Self {
            fail_publish: true,
            ..Self::default()
        }
    }

    /// URL this publisher resolves `queue_name` to
    pub fn queue_url_for(queue_name: &str) -> String {
        format!("https://sqs.eu-west-2.amazonaws.com/000000000000/{queue_name}")
    }

    /// `(queue_url, body)` pairs sent so far
    pub fn published(&self) -> Vec<(String, String)> {
        lock(&self.published).clone()
    }

    /// Sent bodies decoded as completion records
    ///
    /// Bodies that are not completion records are skipped.
    pub fn records(&self) -> Vec<CompletionRecord> {
        lock(&self.published)
            .iter()
            .filter_map(|(_, body)| serde_json::from_str(body).ok())
            .collect()
    }

    /// Number of queue URL lookups performed
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionPublisher for RecordingPublisher {
    async fn resolve_queue_url(&self, queue_name: &str) -> Result<String> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_resolution {
            return Err(DbExportError::Notify(format!(
                "Unable to find output queue {queue_name}"
            )));
        }
        Ok(Self::queue_url_for(queue_name))
    }

    async fn publish(&self, queue_url: &str, body: String) -> Result<()> {
        if self.fail_publish {
            return Err(DbExportError::Notify(format!(
                "Unable to send to output queue {queue_url}"
            )));
        }
        lock(&self.published).push((queue_url.to_string(), body));
        Ok(())
    }
}
