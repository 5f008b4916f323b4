//! Google Maps geocoding integration
//!
//! Converts addresses to coordinates and back via the
//! [Geocoding API](https://developers.google.com/maps/documentation/geocoding),
//! flattening the provider response into a fixed-shape [`GeocodingResult`].
//!
//! # Architecture
//!
//! [`GeocodingClient`] assembles the query, checks the HTTP status and
//! normalizes the first result. Requests go through the [`HttpTransport`]
//! trait; [`ReqwestTransport`] is the default implementation. The
//! [`Geocoder`] trait exposes both lookups for callers that want a trait
//! object.
//!
//! "Not found" is a value, not an error: an empty address or an empty
//! result list yields [`GeocodingResult::not_found`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocoderConfig, GeocodingClient};
//!
//! let mut client = GeocodingClient::new(GeocoderConfig::default())?;
//! client.set_api_key("my-key").set_language("de").set_region("de");
//!
//! let result = client.coordinates_for_address("Alexanderplatz, Berlin").await?;
//! println!("{}, {} ({})", result.lat, result.lng, result.accuracy);
//! ```

mod client;
mod config;
mod error;
mod models;
mod normalize;
mod transport;

pub use client::{Geocoder, GeocodingClient};
pub use config::GeocoderConfig;
pub use error::{CONNECTION_FAILED_MESSAGE, GeocodingError};
pub use models::{GeocodingResult, RESULT_NOT_FOUND};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
