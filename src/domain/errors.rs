//! Domain error types
//!
//! This module defines the error hierarchy for the export handler.
//! Errors never expose third-party types; adapter failures are rendered
//! into messages at the boundary where they occur.

use thiserror::Error;

/// Main export handler error type
///
/// Decode, validation, filename and business-layer errors abort the
/// current message and are surfaced to the Lambda runtime. Storage and
/// notification errors are logged where they occur and never propagated
/// past the component that produced them.
#[derive(Debug, Error)]
pub enum DbExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The invocation carried no queue records
    #[error("No SQS message passed to function")]
    EmptyBatch,

    /// The message body is not a valid export request
    #[error("Error with JSON from input queue: {0}")]
    Decode(String),

    /// The export request is missing required fields
    #[error("Error with message from input queue: {0}")]
    Validation(String),

    /// The storage key could not be built from the survey/period list
    #[error("Unable to create filename. Invalid Survey Period")]
    InvalidSurveyPeriod,

    /// The business layer could not be reached
    #[error("Problem with call to Business Layer: {0}")]
    BusinessLayerUnreachable(String),

    /// The business layer answered but reported a failed export
    #[error("Error with Business Layer: {0}")]
    BusinessLayer(String),

    /// Object storage upload failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Output queue resolution or publish failed
    #[error("Notification error: {0}")]
    Notify(String),
}

impl From<serde_json::Error> for DbExportError {
    fn from(err: serde_json::Error) -> Self {
        DbExportError::Decode(err.to_string())
    }
}

impl From<config::ConfigError> for DbExportError {
    fn from(err: config::ConfigError) -> Self {
        DbExportError::Configuration(err.to_string())
    }
}
