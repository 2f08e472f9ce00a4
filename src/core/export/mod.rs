//! Export processing
//!
//! - [`handler`] - per-invocation orchestration
//! - [`notifier`] - completion record publishing
//! - [`summary`] - invocation counters

pub mod handler;
pub mod notifier;
pub mod summary;

pub use handler::{ExportHandler, QueueMessage};
pub use notifier::CompletionNotifier;
pub use summary::{BatchSummary, MessageOutcome};
