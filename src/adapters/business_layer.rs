//! Business layer HTTP client
//!
//! The business layer takes the input queue message verbatim as a JSON POST
//! body and answers with the export payload. Failed exports are reported in
//! the body rather than through the status code.

use super::traits::ExportSource;
use crate::config::DbExportConfig;
use crate::domain::{DbExportError, ExportPayload, Result, BUSINESS_LAYER_ERROR_MARKER};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP client for the business layer endpoint
///
/// # Example
///
/// ```no_run
/// use dbexport::adapters::{BusinessLayerClient, ExportSource};
/// use dbexport::config::load_config;
///
/// # async fn example() -> dbexport::domain::Result<()> {
/// let config = load_config()?;
/// let client = BusinessLayerClient::new(&config)?;
/// let payload = client.fetch_export(r#"{"snapshot_id":"abc123"}"#).await?;
/// # Ok(())
/// # }
/// ```
pub struct BusinessLayerClient {
    endpoint: String,
    client: Client,
}

impl BusinessLayerClient {
    /// Create a client for the configured endpoint and timeout
    ///
    /// # Errors
    ///
    /// Returns [`DbExportError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: &DbExportConfig) -> Result<Self> {
        let timeout = config.http_timeout();
        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(|e| {
                DbExportError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            endpoint: config.graphql_endpoint.clone(),
            client,
        })
    }
}

#[async_trait]
impl ExportSource for BusinessLayerClient {
    async fn fetch_export(&self, raw_message: &str) -> Result<ExportPayload> {
        tracing::info!(endpoint = %self.endpoint, "Calling business layer");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(raw_message.to_owned())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint = %self.endpoint, error = %e, "HTTP request failed");
                DbExportError::BusinessLayerUnreachable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Business layer returned non-success status"
            );
        }

        let body = response.text().await.map_err(|e| {
            DbExportError::BusinessLayerUnreachable(format!("Failed to read response body: {e}"))
        })?;
        let payload = ExportPayload::new(body);

        if payload.is_business_error() {
            tracing::error!(
                endpoint = %self.endpoint,
                body = %payload.as_str(),
                "Business layer reported a failed export"
            );
            return Err(DbExportError::BusinessLayer(format!(
                "response contained '{BUSINESS_LAYER_ERROR_MARKER}'"
            )));
        }

        tracing::debug!(bytes = payload.len(), "Business layer returned export");
        Ok(payload)
    }
}
