use geocoding::{Forward, Opencage, Point};
use geocsv_core::gateways::geocode::GeoCodingGateway;

/// Forward geocoding backed by the OpenCage API.
pub struct OpenCage {
    api_key: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, address: &str) -> Option<(f64, f64)> {
        if address.trim().is_empty() {
            return None;
        }
        let Some(api_key) = &self.api_key else {
            log::warn!("Cannot resolve address location: no OpenCage API key");
            return None;
        };
        let oc_req = Opencage::new(api_key.clone());
        let res: Result<Vec<Point<f64>>, _> = oc_req.forward(address);
        match res {
            Ok(res) => {
                if let Some(point) = res.first() {
                    log::debug!("Resolved address location '{address}': {point:?}");
                    // `y` is the latitude, `x` the longitude
                    return Some((point.y(), point.x()));
                }
                log::info!("No geocoding results for '{address}'");
                None
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{address}': {err}");
                None
            }
        }
    }
}
