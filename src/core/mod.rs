//! Core business logic.
//!
//! - [`export`] - Message handling, completion notification and summaries
//!
//! # Flow
//!
//! For each queue message the [`export::ExportHandler`]:
//!
//! 1. Decodes and validates the [`crate::domain::ExportRequest`]
//! 2. Builds the [`crate::domain::StorageKey`]
//! 3. Relays the raw message to the business layer
//! 4. Publishes the completion record
//! 5. Uploads the export to object storage
//!
//! Failures in steps 1-3 publish a failure record and end the invocation.

pub mod export;
