use geocsv_core::gateways::geocode::GeoCodingGateway;
use serde::Deserialize;

const DEFAULT_API_URL: &str = "https://nominatim.openstreetmap.org";

/// Forward geocoding backed by the Nominatim HTTP API.
///
/// The service's usage policy requires every client to identify itself
/// with a meaningful user agent, so one has to be supplied by the
/// caller. Requests are issued strictly one at a time.
pub struct Nominatim {
    api_url: String,
    user_agent: String,
    client: reqwest::blocking::Client,
}

impl Nominatim {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self::with_api_url(DEFAULT_API_URL, user_agent)
    }

    pub fn with_api_url(api_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            user_agent: user_agent.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.api_url)
    }
}

/// A single result entry as served by Nominatim.
///
/// The coordinates are transmitted as JSON strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, address: &str) -> Option<(f64, f64)> {
        if address.trim().is_empty() {
            return None;
        }
        let response = match self
            .client
            .get(self.search_url())
            .query(&[("q", address), ("format", "jsonv2"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()
        {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Failed to resolve address location '{address}': {err}");
                return None;
            }
        };
        if !response.status().is_success() {
            log::warn!(
                "Failed to resolve address location '{address}': response status: {}",
                response.status()
            );
            return None;
        }
        let results: Vec<SearchResult> = match response.json() {
            Ok(results) => results,
            Err(err) => {
                log::warn!("Failed to decode geocoding response for '{address}': {err}");
                return None;
            }
        };
        let Some(first) = results.first() else {
            log::info!("No geocoding results for '{address}'");
            return None;
        };
        match (first.lat.parse::<f64>(), first.lon.parse::<f64>()) {
            (Ok(lat), Ok(lng)) => {
                log::debug!("Resolved address location '{address}': ({lat}, {lng})");
                Some((lat, lng))
            }
            _ => {
                log::warn!(
                    "Invalid coordinates in geocoding response for '{address}': ({}, {})",
                    first.lat,
                    first.lon
                );
                None
            }
        }
    }
}
