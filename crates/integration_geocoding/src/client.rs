//! Google Maps geocoding client
//!
//! Forward (address → coordinates) and reverse (coordinates → address)
//! lookups against the Geocoding API, normalized into [`GeocodingResult`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

use crate::config::GeocoderConfig;
use crate::error::GeocodingError;
use crate::models::{ApiResponse, GeocodingResult};
use crate::normalize::format_response;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Trait for geocoding clients
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Convert a free-form address to coordinates
    async fn geocode(&self, address: &str) -> Result<GeocodingResult, GeocodingError>;

    /// Convert coordinates to an address
    async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<GeocodingResult, GeocodingError>;
}

/// Geocoding client for the Google Maps Geocoding API
pub struct GeocodingClient {
    transport: Arc<dyn HttpTransport>,
    config: GeocoderConfig,
}

impl fmt::Debug for GeocodingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodingClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeocodingClient {
    /// Create a client using the default reqwest transport
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodingError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, GeocodingError> {
        Self::new(GeocoderConfig::default())
    }

    /// Create a client on top of a custom transport
    pub fn with_transport<T>(config: GeocoderConfig, transport: T) -> Self
    where
        T: HttpTransport + 'static,
    {
        Self {
            transport: Arc::new(transport),
            config,
        }
    }

    /// Current configuration
    #[must_use]
    pub const fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Set the API key sent with every request
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.config.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Set the language of the returned results
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.config.language = Some(language.into());
        self
    }

    /// Set the region used to bias results
    pub fn set_region(&mut self, region: impl Into<String>) -> &mut Self {
        self.config.region = Some(region.into());
        self
    }

    /// Resolve an address to coordinates
    ///
    /// An empty address yields [`GeocodingResult::not_found`] without a request.
    #[instrument(skip(self))]
    pub async fn coordinates_for_address(
        &self,
        address: &str,
    ) -> Result<GeocodingResult, GeocodingError> {
        if address.is_empty() {
            debug!("Empty address, skipping geocoding request");
            return Ok(GeocodingResult::not_found());
        }

        self.lookup("address", address.to_string()).await
    }

    /// Resolve coordinates to an address
    #[instrument(skip(self))]
    pub async fn address_for_coordinates(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<GeocodingResult, GeocodingError> {
        self.lookup("latlng", format!("{lat},{lng}")).await
    }

    /// Send one request and normalize the first result
    async fn lookup(
        &self,
        field: &'static str,
        value: String,
    ) -> Result<GeocodingResult, GeocodingError> {
        let mut query = self.config.base_query();
        query.push((field, value));

        debug!(endpoint = %self.config.endpoint, field, "Sending geocoding request");

        let response = self.transport.get(&self.config.endpoint, &query).await?;

        if response.status != 200 {
            warn!(status = response.status, "Geocoding provider returned non-200 status");
            return Err(GeocodingError::unexpected_status(response.status));
        }

        let decoded: ApiResponse = serde_json::from_str(&response.body)?;

        if let Some(status) = decoded
            .status
            .as_deref()
            .filter(|s| !matches!(*s, "OK" | "ZERO_RESULTS"))
        {
            warn!(
                status,
                error_message = decoded.error_message.as_deref().unwrap_or_default(),
                "Geocoding provider reported an error status"
            );
        }

        let Some(first) = decoded.results.into_iter().next() else {
            debug!(field, "No geocoding results");
            return Ok(GeocodingResult::not_found());
        };

        Ok(format_response(first))
    }
}

#[async_trait]
impl Geocoder for GeocodingClient {
    async fn geocode(&self, address: &str) -> Result<GeocodingResult, GeocodingError> {
        self.coordinates_for_address(address).await
    }

    async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<GeocodingResult, GeocodingError> {
        self.address_for_coordinates(lat, lng).await
    }
}
