//! Geocoder configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the Google Maps geocoding service
#[derive(Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Geocoding endpoint (default: <https://maps.googleapis.com/maps/api/geocode/json>)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key sent as the `key` query parameter (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Language of the returned results (e.g., "de")
    #[serde(default)]
    pub language: Option<String>,

    /// Region bias as a ccTLD code (e.g., "de")
    #[serde(default)]
    pub region: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeocoderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderConfig")
            .field("endpoint", &self.endpoint)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("language", &self.language)
            .field("region", &self.region)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            language: None,
            region: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeocoderConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Query parameters shared by every request, in `key`, `language`,
    /// `region` order. Unset values are left out.
    pub(crate) fn base_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(key) = &self.api_key {
            params.push(("key", key.expose_secret().to_string()));
        }
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        if let Some(region) = &self.region {
            params.push(("region", region.clone()));
        }
        params
    }

    /// Validate the settings the HTTP transport depends on
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute http(s) URL or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }

        let url = Url::parse(&self.endpoint).map_err(|e| format!("invalid endpoint: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("unsupported endpoint scheme: {}", url.scheme()));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
