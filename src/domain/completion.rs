//! Completion records published to the output queue

use serde::{Deserialize, Serialize};

/// Location reported when no artifact is available
pub const NULL_LOCATION: &str = "null";

/// Outcome of one export request, as published on the output queue
///
/// Wire format: `{"snapshot_id": "...", "location": "...", "successful": bool}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Snapshot the record reports on (empty if the message could not be decoded)
    pub snapshot_id: String,

    /// Artifact location, or [`NULL_LOCATION`] on failure
    pub location: String,

    /// Whether the business layer produced the export
    pub successful: bool,
}

impl CompletionRecord {
    /// Record for a successful export stored at `location`
    pub fn success(snapshot_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            location: location.into(),
            successful: true,
        }
    }

    /// Record for a failed export
    pub fn failure(snapshot_id: impl Into<String>) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            location: NULL_LOCATION.to_string(),
            successful: false,
        }
    }
}
