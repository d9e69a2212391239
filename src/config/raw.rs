use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("geocsv.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub reference: Option<Reference>,
    pub distance: Option<Distance>,
    pub address: Option<Address>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reference {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Reference {
    fn default() -> Self {
        Config::default()
            .reference
            .expect("Reference configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Distance {
    pub unit: DistanceUnit,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Address {
    pub mode: AddressMode,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressMode {
    Full,
    Short,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Nominatim,
    Opencage,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub nominatim: Option<Nominatim>,
    pub opencage: Option<OpenCage>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub user_agent: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: String,
}
