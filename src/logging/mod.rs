//! Logging and observability
//!
//! JSON-formatted structured logging through `tracing`, plus a few macros
//! for the log lines every invocation emits.
//!
//! # Example
//!
//! ```no_run
//! use dbexport::logging::init_logging;
//!
//! init_logging("info").expect("Failed to initialize logging");
//! tracing::info!(snapshot_id = "abc123", "Export stored");
//! ```

pub mod structured;

pub use structured::init_logging;

/// Log receipt of an input queue message
///
/// # Example
///
/// ```no_run
/// use dbexport::log_message_received;
///
/// log_message_received!("msg-1", "aws:sqs", r#"{"snapshot_id":"abc123"}"#);
/// ```
#[macro_export]
macro_rules! log_message_received {
    ($message_id:expr, $event_source:expr, $body:expr) => {
        tracing::info!(
            message_id = %$message_id,
            event_source = %$event_source,
            body = %$body,
            "Message received"
        );
    };
}

/// Log an error that is deliberately not propagated
///
/// # Example
///
/// ```no_run
/// use dbexport::log_swallowed_error;
/// use dbexport::domain::DbExportError;
///
/// let error = DbExportError::Notify("queue not found".to_string());
/// log_swallowed_error!(&error, "Failed to publish completion record");
/// ```
#[macro_export]
macro_rules! log_swallowed_error {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred, continuing"
        );
    };
}
