//! Completion notifier
//!
//! Publishes one [`CompletionRecord`] per message outcome. Publishing is
//! best-effort: failures are logged and never reach the caller.

use crate::adapters::CompletionPublisher;
use crate::config::DbExportConfig;
use crate::domain::{CompletionRecord, DbExportError, Result};
use crate::log_swallowed_error;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Publishes completion records to the configured output queue
///
/// The queue URL is resolved from its logical name on first use and reused
/// for the lifetime of the notifier. A failed resolution is retried on the
/// next notification.
pub struct CompletionNotifier {
    publisher: Arc<dyn CompletionPublisher>,
    queue_name: String,
    queue_url: OnceCell<String>,
}

impl CompletionNotifier {
    /// Create a notifier for the configured output queue
    pub fn new(publisher: Arc<dyn CompletionPublisher>, config: &DbExportConfig) -> Self {
        Self {
            publisher,
            queue_name: config.output_queue.clone(),
            queue_url: OnceCell::new(),
        }
    }

    /// Publish `record`, logging and discarding any failure
    pub async fn notify(&self, record: CompletionRecord) {
        if let Err(e) = self.try_notify(&record).await {
            log_swallowed_error!(&e, "Failed to publish completion record");
        }
    }

    async fn try_notify(&self, record: &CompletionRecord) -> Result<()> {
        let queue_url = self
            .queue_url
            .get_or_try_init(|| self.publisher.resolve_queue_url(&self.queue_name))
            .await?;

        let body = serde_json::to_string(record).map_err(|e| {
            DbExportError::Notify(format!("Failed to encode completion record: {e}"))
        })?;

        tracing::info!(
            queue = %self.queue_name,
            snapshot_id = %record.snapshot_id,
            location = %record.location,
            successful = record.successful,
            "Publishing completion record"
        );

        self.publisher.publish(queue_url, body).await
    }
}
