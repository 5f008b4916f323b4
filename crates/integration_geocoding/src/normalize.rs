//! Flattening of the provider response into a [`GeocodingResult`]

use crate::models::{AddressComponent, ApiResult, GeocodingResult};

/// Which of the two names of an address component to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameForm {
    Long,
    Short,
}

/// Convert the first provider result into the flat result shape
pub(crate) fn format_response(result: ApiResult) -> GeocodingResult {
    let components = &result.address_components;

    GeocodingResult {
        lat: result.geometry.location.lat,
        lng: result.geometry.location.lng,
        accuracy: result.geometry.location_type,
        street_number: address_component(components, "street_number", NameForm::Long),
        route: address_component(components, "route", NameForm::Short),
        city: address_component(components, "locality", NameForm::Long),
        state: address_component(components, "administrative_area_level_1", NameForm::Short),
        country: address_component(components, "country", NameForm::Short),
        postal_code: address_component(components, "postal_code", NameForm::Short),
        formatted_address: result.formatted_address,
    }
}

/// First component tagged with `tag`; later matches are ignored
fn address_component(components: &[AddressComponent], tag: &str, form: NameForm) -> Option<String> {
    components
        .iter()
        .find(|component| component.types.iter().any(|t| t == tag))
        .map(|component| match form {
            NameForm::Long => component.long_name.clone(),
            NameForm::Short => component.short_name.clone(),
        })
}
