//! HTTP transport seam
//!
//! [`GeocodingClient`](crate::GeocodingClient) never talks to reqwest
//! directly. It hands the endpoint and query parameters to an
//! [`HttpTransport`] and gets back the raw status and body, which keeps the
//! normalization logic testable without a network.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tracing::debug;

use crate::config::GeocoderConfig;
use crate::error::GeocodingError;

/// Raw answer of a GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Create a response from a status code and body
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Capability to issue a GET request with query parameters
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a GET request to `url` with the given query parameters
    ///
    /// Non-success statuses are not errors at this level; they come back in
    /// [`TransportResponse::status`].
    async fn get(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<TransportResponse, GeocodingError>;
}

/// Default transport backed by a [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport using the timeout from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("integration_geocoding/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConfigurationError(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one shared with other integrations
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<TransportResponse, GeocodingError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "Received geocoding response");

        Ok(TransportResponse { status, body })
    }
}
