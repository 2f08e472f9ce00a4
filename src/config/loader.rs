//! Configuration loader reading the process environment

use super::schema::DbExportConfig;
use crate::domain::errors::DbExportError;
use crate::domain::result::Result;
use config::{Config, Environment, Map};

/// Loads configuration from the process environment
///
/// This function:
/// 1. Collects environment variables (keys are matched case-insensitively)
/// 2. Deserializes them into [`DbExportConfig`], applying defaults
/// 3. Validates the configuration
///
/// # Errors
///
/// Returns [`DbExportError::Configuration`] if a required variable is
/// missing or a value is invalid.
///
/// # Examples
///
/// ```no_run
/// use dbexport::config::load_config;
///
/// let config = load_config().expect("Failed to load config");
/// println!("Exporting to bucket {}", config.bucket);
/// ```
pub fn load_config() -> Result<DbExportConfig> {
    load_config_from(None)
}

/// Loads configuration from an explicit variable map instead of the process
/// environment
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_config_from_vars(vars: Map<String, String>) -> Result<DbExportConfig> {
    load_config_from(Some(vars))
}

fn load_config_from(vars: Option<Map<String, String>>) -> Result<DbExportConfig> {
    let config: DbExportConfig = Config::builder()
        .add_source(Environment::default().source(vars))
        .build()?
        .try_deserialize()?;

    config.validate().map_err(|e| {
        DbExportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(
        region = %config.region,
        bucket = %config.bucket,
        output_queue = %config.output_queue,
        graphql_endpoint = %config.graphql_endpoint,
        "Configuration loaded"
    );

    Ok(config)
}
