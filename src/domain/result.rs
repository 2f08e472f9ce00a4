//! Result type alias for the export handler

use super::errors::DbExportError;

/// Result type alias using [`DbExportError`] as the error type.
///
/// # Examples
///
/// ```
/// use dbexport::domain::result::Result;
/// use dbexport::domain::errors::DbExportError;
///
/// fn failing_function() -> Result<()> {
///     Err(DbExportError::Validation("No SnapshotID given in message".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DbExportError>;
