use geocsv_core::gateways::geocode::GeoCodingGateway;
use geocsv_gateways::{nominatim::Nominatim, opencage::OpenCage};

use crate::config;

pub fn geocoding_gateway(cfg: &config::Config) -> GeoGw {
    match &cfg.geocoding.gateway {
        Some(config::GeocodingGateway::Nominatim { user_agent }) => {
            log::info!("Use Nominatim geocoding gateway");
            GeoGw::new(Nominatim::new(user_agent.clone()))
        }
        Some(config::GeocodingGateway::OpenCage { api_key }) => {
            log::info!("Use OpenCage geocoding gateway");
            GeoGw::new(OpenCage::new(Some(api_key.clone())))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            GeoGw::new(DummyGeoGw)
        }
    }
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lat_lng(&self, _address: &str) -> Option<(f64, f64)> {
        log::debug!("Cannot resolve addresses because no geocoding gateway was configured");
        None
    }
}

pub struct GeoGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeoGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeoGw {
    fn resolve_address_lat_lng(&self, address: &str) -> Option<(f64, f64)> {
        self.0.resolve_address_lat_lng(address)
    }
}
