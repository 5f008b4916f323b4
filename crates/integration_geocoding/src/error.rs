//! Geocoding error types

use thiserror::Error;

/// Message carried by [`GeocodingError::ConnectionFailed`] when the provider
/// answers with anything other than `200 OK`
pub const CONNECTION_FAILED_MESSAGE: &str = "could not connect to googleapis.com/maps/api";

/// Errors that can occur during geocoding
///
/// "Not found" is not an error: an empty address or an empty result set
/// produce [`GeocodingResult::not_found`](crate::GeocodingResult::not_found).
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The provider could not be reached or did not answer with `200 OK`
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,

    /// Failed to parse the provider response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// The HTTP transport could not be built from the configuration
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),
}

impl GeocodingError {
    /// Build the error raised for a non-200 provider status
    #[must_use]
    pub fn unexpected_status(status: u16) -> Self {
        Self::ConnectionFailed(format!("{CONNECTION_FAILED_MESSAGE} (HTTP {status})"))
    }
}

impl From<reqwest::Error> for GeocodingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GeocodingError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_message() {
        let err = GeocodingError::unexpected_status(503);
        let msg = err.to_string();
        assert!(msg.contains(CONNECTION_FAILED_MESSAGE));
        assert!(msg.contains("503"));
        assert!(matches!(err, GeocodingError::ConnectionFailed(_)));
    }

    #[test]
    fn test_error_display() {
        let err = GeocodingError::Timeout;
        assert!(err.to_string().contains("timed out"));

        let err = GeocodingError::ConfigurationError("endpoint must not be empty".to_string());
        assert!(err.to_string().contains("endpoint must not be empty"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = GeocodingError::from(json_err);
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }
}
