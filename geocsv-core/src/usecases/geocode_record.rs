use crate::{
    entities::{Address, DistanceUnit, MapPoint},
    gateways::geocode::GeoCodingGateway,
    usecases::{format_address, AddressMode},
};

/// The geographic values derived for one record.
///
/// All fields are `None` if the address could not be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeocodedFields {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub distance: Option<f64>,
}

/// Resolve the address of one record and derive its distance from the
/// reference point.
///
/// A failed resolution is not an error: the record keeps empty
/// geographic fields and processing continues with the next record.
pub fn geocode_record(
    gateway: &dyn GeoCodingGateway,
    addr: &Address,
    mode: AddressMode,
    reference_point: MapPoint,
    distance_unit: DistanceUnit,
) -> GeocodedFields {
    if addr.is_empty() {
        log::debug!("Skipping geocoding of empty address");
        return GeocodedFields::default();
    }
    let address = format_address(addr, mode);
    let Some((lat, lng)) = gateway.resolve_address_lat_lng(&address) else {
        return GeocodedFields::default();
    };
    let Some(pos) = MapPoint::try_from_lat_lng_deg(lat, lng) else {
        log::warn!("Geocoder returned coordinates out of range for '{address}': ({lat}, {lng})");
        return GeocodedFields::default();
    };
    let distance = MapPoint::distance(pos, reference_point).to_unit(distance_unit);
    GeocodedFields {
        latitude: Some(pos.lat_deg()),
        longitude: Some(pos.lng_deg()),
        distance: Some(distance),
    }
}
