//! Domain models and types for the export handler.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Input messages** ([`ExportRequest`], [`SurveyPeriod`], [`ValidatedRequest`])
//! - **Storage keys** ([`StorageKey`])
//! - **Business layer output** ([`ExportPayload`])
//! - **Output messages** ([`CompletionRecord`])
//! - **Error types** ([`DbExportError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use dbexport::domain::{ExportRequest, StorageKey};
//!
//! # fn example() -> dbexport::domain::Result<()> {
//! let body = r#"{"snapshot_id":"abc123","surveyperiods":[{"survey":"rsi","period":"201501"}]}"#;
//! let request = ExportRequest::decode(body)?.validate()?;
//! let key = StorageKey::build(request.snapshot_id(), request.survey_periods())?;
//! assert_eq!(key.as_str(), "snapshot-rsi_201501-abc123");
//! # Ok(())
//! # }
//! ```

pub mod completion;
pub mod errors;
pub mod payload;
pub mod request;
pub mod result;
pub mod storage_key;

pub use completion::{CompletionRecord, NULL_LOCATION};
pub use errors::DbExportError;
pub use payload::{ExportPayload, BUSINESS_LAYER_ERROR_MARKER};
pub use request::{ExportRequest, SurveyPeriod, ValidatedRequest};
pub use result::Result;
pub use storage_key::StorageKey;
