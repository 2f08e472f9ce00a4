//! Configuration schema types
//!
//! Field names map onto the environment variables the function is deployed
//! with (`AWS_REGION`, `S3_BUCKET`, `GRAPHQL_ENDPOINT`, ...).

use crate::domain::StorageKey;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the artifact location is written into completion records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationFormat {
    /// Fully-qualified `s3://<bucket>/<key>` locator
    #[default]
    #[serde(alias = "s3")]
    S3Uri,
    /// The bare storage key
    Key,
}

/// Main configuration, read once at cold start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbExportConfig {
    /// AWS region of the bucket and output queue
    #[serde(rename = "aws_region")]
    pub region: String,

    /// Bucket the exports are written to
    #[serde(rename = "s3_bucket")]
    pub bucket: String,

    /// Business layer endpoint the raw message is posted to
    pub graphql_endpoint: String,

    /// Logical name of the output queue
    #[serde(rename = "db_export_output_queue")]
    pub output_queue: String,

    /// Request timeout for the business layer call
    #[serde(
        rename = "db_export_http_timeout_seconds",
        default = "default_timeout_seconds"
    )]
    pub http_timeout_seconds: u64,

    /// Location convention for successful completion records
    #[serde(rename = "db_export_location_format", default)]
    pub location_format: LocationFormat,

    /// Log level (trace, debug, info, warn, error)
    #[serde(rename = "db_export_log_level", default = "default_log_level")]
    pub log_level: String,
}

impl DbExportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value
    pub fn validate(&self) -> Result<(), String> {
        if self.region.trim().is_empty() {
            return Err("AWS_REGION cannot be empty".to_string());
        }
        if self.bucket.trim().is_empty() {
            return Err("S3_BUCKET cannot be empty".to_string());
        }
        if self.output_queue.trim().is_empty() {
            return Err("DB_EXPORT_OUTPUT_QUEUE cannot be empty".to_string());
        }

        let endpoint = url::Url::parse(&self.graphql_endpoint)
            .map_err(|e| format!("GRAPHQL_ENDPOINT '{}' is not a valid URL: {e}", self.graphql_endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err("GRAPHQL_ENDPOINT must start with http:// or https://".to_string());
        }

        if self.http_timeout_seconds == 0 {
            return Err("DB_EXPORT_HTTP_TIMEOUT_SECONDS must be greater than 0".to_string());
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        Ok(())
    }

    /// Timeout applied to the business layer request
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Location written into a successful completion record
    pub fn artifact_location(&self, key: &StorageKey) -> String {
        match self.location_format {
            LocationFormat::S3Uri => format!("s3://{}/{}", self.bucket, key),
            LocationFormat::Key => key.to_string(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}
