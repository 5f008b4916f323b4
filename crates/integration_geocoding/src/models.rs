//! Geocoding result and provider response models

use serde::{Deserialize, Serialize, Serializer};

/// Marker used for `accuracy` and `formatted_address` when nothing matched
pub const RESULT_NOT_FOUND: &str = "result_not_found";

/// Flattened geocoding result, shared by forward and reverse lookups
///
/// Always serializes to the same ten keys. Address fields the provider did
/// not return serialize as `false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodingResult {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Provider location type (e.g. `ROOFTOP`) or [`RESULT_NOT_FOUND`]
    pub accuracy: String,
    /// House number (long form)
    #[serde(serialize_with = "string_or_false")]
    pub street_number: Option<String>,
    /// Street name (short form)
    #[serde(serialize_with = "string_or_false")]
    pub route: Option<String>,
    /// Locality (long form)
    #[serde(serialize_with = "string_or_false")]
    pub city: Option<String>,
    /// First-level administrative area (short form)
    #[serde(serialize_with = "string_or_false")]
    pub state: Option<String>,
    /// Country code (short form)
    #[serde(serialize_with = "string_or_false")]
    pub country: Option<String>,
    /// Postal code (short form)
    #[serde(serialize_with = "string_or_false")]
    pub postal_code: Option<String>,
    /// Full address as formatted by the provider, or [`RESULT_NOT_FOUND`]
    pub formatted_address: String,
}

impl GeocodingResult {
    /// The sentinel returned when no match exists
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            lat: 0.0,
            lng: 0.0,
            accuracy: RESULT_NOT_FOUND.to_string(),
            street_number: None,
            route: None,
            city: None,
            state: None,
            country: None,
            postal_code: None,
            formatted_address: RESULT_NOT_FOUND.to_string(),
        }
    }

    /// Whether this is a real match rather than the not-found sentinel
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.accuracy != RESULT_NOT_FOUND
    }
}

#[allow(clippy::ref_option)] // signature dictated by serde's serialize_with
fn string_or_false<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(v),
        None => serializer.serialize_bool(false),
    }
}

/// Raw geocoding API response
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub results: Vec<ApiResult>,
    /// Provider status code such as `OK` or `ZERO_RESULTS`
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub geometry: Geometry,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Geometry {
    #[serde(default)]
    pub location: LatLng,
    #[serde(default)]
    pub location_type: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A tagged fragment of a structured address
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}
