//! SQS completion publisher

use super::traits::CompletionPublisher;
use crate::domain::{DbExportError, Result};
use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::Client;

/// Publishes completion records to an SQS queue
pub struct SqsCompletionPublisher {
    client: Client,
}

impl SqsCompletionPublisher {
    /// Wrap an SQS client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompletionPublisher for SqsCompletionPublisher {
    async fn resolve_queue_url(&self, queue_name: &str) -> Result<String> {
        let output = self
            .client
            .get_queue_url()
            .queue_name(queue_name)
            .send()
            .await
            .map_err(|e| {
                DbExportError::Notify(format!(
                    "Unable to find output queue {queue_name}: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        output
            .queue_url()
            .map(str::to_owned)
            .ok_or_else(|| DbExportError::Notify(format!("No URL returned for queue {queue_name}")))
    }

    async fn publish(&self, queue_url: &str, body: String) -> Result<()> {
        self.client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| {
                DbExportError::Notify(format!(
                    "Unable to send to output queue {queue_url}: {}",
                    DisplayErrorContext(&e)
                ))
            })?;
        Ok(())
    }
}
