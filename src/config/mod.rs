//! Configuration management.
//!
//! The handler is configured entirely through environment variables, read
//! once at cold start into a [`DbExportConfig`] that is then handed to every
//! component. Nothing below this module reads the environment.
//!
//! # Variables
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `AWS_REGION` | yes | |
//! | `S3_BUCKET` | yes | |
//! | `GRAPHQL_ENDPOINT` | yes | |
//! | `DB_EXPORT_OUTPUT_QUEUE` | yes | |
//! | `DB_EXPORT_HTTP_TIMEOUT_SECONDS` | no | `30` |
//! | `DB_EXPORT_LOCATION_FORMAT` | no | `s3_uri` (or `key`) |
//! | `DB_EXPORT_LOG_LEVEL` | no | `info` |
//!
//! # Example
//!
//! ```rust,no_run
//! use dbexport::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! println!("Business layer: {}", config.graphql_endpoint);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from_vars};
pub use schema::{DbExportConfig, LocationFormat};
