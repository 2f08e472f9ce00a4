//! Export request messages read from the input queue
//!
//! A message body is decoded into an [`ExportRequest`] and must pass
//! [`ExportRequest::validate`] before anything is sent to the business layer.

use super::errors::DbExportError;
use super::result::Result;
use serde::{Deserialize, Deserializer};

/// A survey and the reporting period it is exported for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SurveyPeriod {
    /// Survey identifier
    #[serde(default)]
    pub survey: String,

    /// Reporting period, e.g. `201501`
    #[serde(default)]
    pub period: String,
}

impl SurveyPeriod {
    /// Create a new survey/period pair
    pub fn new(survey: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            survey: survey.into(),
            period: period.into(),
        }
    }
}

/// Export request as it arrives on the input queue
///
/// Missing or `null` fields decode to empty values so that an incomplete
/// message is reported as a validation failure rather than a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportRequest {
    /// Snapshot being exported
    #[serde(default, deserialize_with = "null_as_default")]
    pub snapshot_id: String,

    /// Survey/period combinations, in the order they were requested
    #[serde(
        rename = "surveyperiods",
        default,
        deserialize_with = "null_as_default"
    )]
    pub survey_periods: Vec<SurveyPeriod>,
}

impl ExportRequest {
    /// Decode a raw queue message body
    ///
    /// # Errors
    ///
    /// Returns [`DbExportError::Decode`] if the body is not a JSON object of
    /// the expected shape.
    pub fn decode(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check that the request names a snapshot and at least one survey/period
    ///
    /// The snapshot id is checked first.
    ///
    /// # Errors
    ///
    /// Returns [`DbExportError::Validation`] describing the missing field.
    pub fn validate(self) -> Result<ValidatedRequest> {
        if self.snapshot_id.is_empty() {
            return Err(DbExportError::Validation(
                "No SnapshotID given in message".to_string(),
            ));
        }
        if self.survey_periods.is_empty() {
            return Err(DbExportError::Validation(
                "No Survey/period combinations given in message".to_string(),
            ));
        }
        Ok(ValidatedRequest(self))
    }
}

/// An [`ExportRequest`] that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest(ExportRequest);

impl ValidatedRequest {
    /// Snapshot being exported (never empty)
    pub fn snapshot_id(&self) -> &str {
        &self.0.snapshot_id
    }

    /// Survey/period combinations (never empty)
    pub fn survey_periods(&self) -> &[SurveyPeriod] {
        &self.0.survey_periods
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_message() {
        let body = r#"{"snapshot_id":"abc123","surveyperiods":[{"survey":"rsi","period":"201501"},{"survey":"mbs","period":"201502"}]}"#;
        let request = ExportRequest::decode(body).unwrap();

        assert_eq!(request.snapshot_id, "abc123");
        assert_eq!(
            request.survey_periods,
            vec![
                SurveyPeriod::new("rsi", "201501"),
                SurveyPeriod::new("mbs", "201502")
            ]
        );
    }

    #[test]
    fn test_decode_missing_and_null_fields() {
        let request = ExportRequest::decode(r#"{"snapshot_id":"abc123"}"#).unwrap();
        assert!(request.survey_periods.is_empty());

        let request =
            ExportRequest::decode(r#"{"snapshot_id":null,"surveyperiods":null}"#).unwrap();
        assert!(request.snapshot_id.is_empty());
        assert!(request.survey_periods.is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        let err = ExportRequest::decode("{not json").unwrap_err();
        assert!(matches!(err, DbExportError::Decode(_)));

        let err = ExportRequest::decode(r#"{"snapshot_id":42}"#).unwrap_err();
        assert!(matches!(err, DbExportError::Decode(_)));

        let err = ExportRequest::decode("").unwrap_err();
        assert!(matches!(err, DbExportError::Decode(_)));
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        let request = ExportRequest {
            snapshot_id: "abc123".to_string(),
            survey_periods: vec![SurveyPeriod::new("rsi", "201501")],
        };
        let validated = request.validate().unwrap();
        assert_eq!(validated.snapshot_id(), "abc123");
        assert_eq!(validated.survey_periods().len(), 1);
    }

    #[test]
    fn test_validate_rejects_incomplete_requests() {
        let cases = [
            ("", vec![SurveyPeriod::new("rsi", "201501")], "SnapshotID"),
            ("abc123", vec![], "Survey/period"),
            ("", vec![], "SnapshotID"),
        ];

        for (snapshot_id, survey_periods, expected) in cases {
            let request = ExportRequest {
                snapshot_id: snapshot_id.to_string(),
                survey_periods,
            };
            match request.validate() {
                Err(DbExportError::Validation(msg)) => assert!(msg.contains(expected)),
                other => panic!("Expected validation error, got {other:?}"),
            }
        }
    }
}
