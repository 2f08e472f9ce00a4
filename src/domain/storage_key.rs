//! Object storage key derivation

use super::errors::DbExportError;
use super::request::SurveyPeriod;
use super::result::Result;
use std::fmt;

/// Prefix of every exported artifact key
pub const KEY_PREFIX: &str = "snapshot";

/// Deterministic object storage key of one export
///
/// Format: `snapshot-<survey>_<period>[-<survey>_<period>...]-<snapshot_id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Build the key for a snapshot and its survey/period list
    ///
    /// Pairs keep their input order. The survey/period list is checked here
    /// as well as by validation since the builder can be reached on its own.
    ///
    /// # Errors
    ///
    /// Returns [`DbExportError::InvalidSurveyPeriod`] if `survey_periods` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbexport::domain::{StorageKey, SurveyPeriod};
    ///
    /// let key = StorageKey::build("abc123", &[SurveyPeriod::new("rsi", "201501")]).unwrap();
    /// assert_eq!(key.as_str(), "snapshot-rsi_201501-abc123");
    /// ```
    pub fn build(snapshot_id: &str, survey_periods: &[SurveyPeriod]) -> Result<Self> {
        if survey_periods.is_empty() {
            return Err(DbExportError::InvalidSurveyPeriod);
        }

        let combined = survey_periods
            .iter()
            .map(|sp| format!("{}_{}", sp.survey, sp.period))
            .collect::<Vec<_>>()
            .join("-");

        Ok(Self([KEY_PREFIX, &combined, snapshot_id].join("-")))
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
