//! Export handler - orchestrates one invocation of the function
//!
//! Each message goes through decode, validate, key derivation, the business
//! layer call and the upload, strictly in that order. Messages within an
//! invocation are processed one at a time and the first aborting message
//! ends the invocation with its error.

use crate::adapters::{ArtifactStore, CompletionPublisher, ExportSource};
use crate::config::DbExportConfig;
use crate::core::export::notifier::CompletionNotifier;
use crate::core::export::summary::{BatchSummary, MessageOutcome};
use crate::domain::{CompletionRecord, DbExportError, ExportRequest, Result, StorageKey};
use crate::{log_message_received, log_swallowed_error};
use aws_lambda_events::event::sqs::{SqsEvent, SqsMessage};
use std::sync::Arc;
use std::time::Instant;

/// A message taken from the input queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueMessage {
    /// Queue-assigned message id
    pub message_id: String,

    /// Event source, e.g. `aws:sqs`
    pub event_source: String,

    /// Raw message body
    pub body: String,
}

impl QueueMessage {
    /// Create a message with only a body
    pub fn new(message_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            event_source: String::new(),
            body: body.into(),
        }
    }
}

impl From<SqsMessage> for QueueMessage {
    fn from(message: SqsMessage) -> Self {
        Self {
            message_id: message.message_id.unwrap_or_default(),
            event_source: message.event_source.unwrap_or_default(),
            body: message.body.unwrap_or_default(),
        }
    }
}

/// Export handler
///
/// # Example
///
/// ```rust,no_run
/// use dbexport::core::export::{ExportHandler, QueueMessage};
/// use dbexport::testing::{MemoryArtifactStore, RecordingPublisher, StaticExportSource};
/// use std::sync::Arc;
///
/// # async fn example(config: dbexport::config::DbExportConfig) -> dbexport::domain::Result<()> {
/// let handler = ExportHandler::new(
///     &config,
///     Arc::new(StaticExportSource::payload("DATA")),
///     Arc::new(MemoryArtifactStore::new()),
///     Arc::new(RecordingPublisher::new()),
/// );
///
/// let body = r#"{"snapshot_id":"abc123","surveyperiods":[{"survey":"rsi","period":"201501"}]}"#;
/// let summary = handler.handle_batch(vec![QueueMessage::new("msg-1", body)]).await?;
/// println!("Stored {} artifacts", summary.artifacts_stored);
/// # Ok(())
/// # }
/// ```
pub struct ExportHandler {
    config: DbExportConfig,
    source: Arc<dyn ExportSource>,
    store: Arc<dyn ArtifactStore>,
    notifier: CompletionNotifier,
}

impl ExportHandler {
    /// Create a new export handler
    pub fn new(
        config: &DbExportConfig,
        source: Arc<dyn ExportSource>,
        store: Arc<dyn ArtifactStore>,
        publisher: Arc<dyn CompletionPublisher>,
    ) -> Self {
        Self {
            config: config.clone(),
            source,
            store,
            notifier: CompletionNotifier::new(publisher, config),
        }
    }

    /// Handle an SQS event delivered by the Lambda runtime
    ///
    /// # Errors
    ///
    /// See [`ExportHandler::handle_batch`].
    pub async fn handle_event(&self, event: SqsEvent) -> Result<BatchSummary> {
        let messages = event.records.into_iter().map(QueueMessage::from).collect();
        self.handle_batch(messages).await
    }

    /// Process every message of one invocation in order
    ///
    /// # Errors
    ///
    /// Returns [`DbExportError::EmptyBatch`] if there are no messages, or the
    /// error of the first message that aborted. Messages after it are not
    /// processed.
    pub async fn handle_batch(&self, messages: Vec<QueueMessage>) -> Result<BatchSummary> {
        if messages.is_empty() {
            return Err(DbExportError::EmptyBatch);
        }

        let start_time = Instant::now();
        let mut summary = BatchSummary::new(messages.len());

        tracing::info!(messages = messages.len(), "Starting export invocation");

        for message in &messages {
            log_message_received!(message.message_id, message.event_source, message.body);

            match self.handle_message(&message.body).await {
                Ok(outcome) => summary.record(&outcome),
                Err(e) => {
                    tracing::error!(
                        message_id = %message.message_id,
                        error = %e,
                        processed = summary.messages_processed,
                        "Message processing failed, ending invocation"
                    );
                    return Err(e);
                }
            }
        }

        summary.duration = start_time.elapsed();

        tracing::info!(
            messages_received = summary.messages_received,
            messages_processed = summary.messages_processed,
            artifacts_stored = summary.artifacts_stored,
            storage_failures = summary.storage_failures,
            duration_ms = summary.duration.as_millis() as u64,
            "Export invocation completed"
        );

        Ok(summary)
    }

    /// Process a single raw message body
    ///
    /// Publishes exactly one completion record, except when the storage key
    /// cannot be built. A successful record is published as soon as the
    /// business layer returns the export; the upload outcome does not
    /// change it.
    ///
    /// # Errors
    ///
    /// Decode, validation, storage key and business layer errors. Upload
    /// failures are logged and reported through [`MessageOutcome::stored`].
    pub async fn handle_message(&self, body: &str) -> Result<MessageOutcome> {
        let request = match ExportRequest::decode(body) {
            Ok(request) => request,
            Err(e) => return Err(self.fail("", e).await),
        };

        let snapshot_id = request.snapshot_id.clone();
        let request = match request.validate() {
            Ok(request) => request,
            Err(e) => return Err(self.fail(&snapshot_id, e).await),
        };

        let key = StorageKey::build(request.snapshot_id(), request.survey_periods())?;
        tracing::info!(snapshot_id = %snapshot_id, key = %key, "Built storage key");

        let payload = match self.source.fetch_export(body).await {
            Ok(payload) => payload,
            Err(e) => return Err(self.fail(&snapshot_id, e).await),
        };

        self.notifier
            .notify(CompletionRecord::success(
                snapshot_id.as_str(),
                self.config.artifact_location(&key),
            ))
            .await;

        let stored = match self.store.put_artifact(&key, payload).await {
            Ok(()) => true,
            Err(e) => {
                log_swallowed_error!(&e, "Failed to store export");
                false
            }
        };

        Ok(MessageOutcome {
            snapshot_id,
            key,
            stored,
        })
    }

    /// Publish a failure record for `snapshot_id` and hand back the error
    async fn fail(&self, snapshot_id: &str, error: DbExportError) -> DbExportError {
        tracing::warn!(snapshot_id = %snapshot_id, error = %error, "Export failed");
        self.notifier
            .notify(CompletionRecord::failure(snapshot_id))
            .await;
        error
    }
}
