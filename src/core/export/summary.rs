//! Per-invocation processing summary

use crate::domain::StorageKey;
use std::time::Duration;

/// Result of one fully processed message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOutcome {
    /// Snapshot that was exported
    pub snapshot_id: String,

    /// Key the export was written under
    pub key: StorageKey,

    /// Whether the upload succeeded
    pub stored: bool,
}

/// Summary of one handler invocation
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Number of records in the invocation
    pub messages_received: usize,

    /// Number of messages that reached the storage step
    pub messages_processed: usize,

    /// Number of artifacts uploaded
    pub artifacts_stored: usize,

    /// Number of uploads that failed
    pub storage_failures: usize,

    /// Duration of the invocation
    pub duration: Duration,
}

impl BatchSummary {
    /// Create an empty summary for `messages_received` records
    pub fn new(messages_received: usize) -> Self {
        Self {
            messages_received,
            ..Default::default()
        }
    }

    /// Account for one processed message
    pub fn record(&mut self, outcome: &MessageOutcome) {
        self.messages_processed += 1;
        if outcome.stored {
            self.artifacts_stored += 1;
        } else {
            self.storage_failures += 1;
        }
    }

    /// Check if every processed message was stored
    pub fn is_fully_stored(&self) -> bool {
        self.storage_failures == 0
    }
}
