use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::{anyhow, Result};
use geocsv_core::usecases::AddressMode;
use geocsv_entities::geo::{DistanceUnit, MapPoint};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geocsv.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";
const ENV_NAME_USER_AGENT: &str = "GEOCSV_USER_AGENT";

pub struct Config {
    pub reference_point: MapPoint,
    pub distance_unit: DistanceUnit,
    pub address_mode: AddressMode,
    pub geocoding: Geocoding,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    Nominatim { user_agent: String },
    OpenCage { api_key: String },
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            if let Some(GeocodingGateway::OpenCage { api_key: key }) = &mut cfg.geocoding.gateway {
                *key = api_key;
            }
        }
        if let Ok(user_agent) = env::var(ENV_NAME_USER_AGENT) {
            if let Some(GeocodingGateway::Nominatim { user_agent: ua }) =
                &mut cfg.geocoding.gateway
            {
                *ua = user_agent;
            }
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            reference,
            distance,
            address,
            geocoding,
            gateway,
        } = from;

        let raw::Reference {
            latitude,
            longitude,
        } = reference.unwrap_or_default();
        let reference_point = MapPoint::try_from_lat_lng_deg(latitude, longitude)
            .ok_or_else(|| anyhow!("Invalid reference point: {latitude},{longitude}"))?;

        let distance_unit = match distance.map(|distance| distance.unit) {
            Some(raw::DistanceUnit::Kilometers) => DistanceUnit::Kilometers,
            Some(raw::DistanceUnit::Miles) | None => DistanceUnit::Miles,
        };

        let address_mode = match address.map(|address| address.mode) {
            Some(raw::AddressMode::Full) => AddressMode::Full,
            Some(raw::AddressMode::Short) | None => AddressMode::Short,
        };

        let gateway = gateway.unwrap_or_default();
        let geocoding_gateway = match geocoding.and_then(|geocoding| geocoding.gateway) {
            Some(raw::GeocodingGateway::Nominatim) => {
                let raw::Nominatim { user_agent } = gateway
                    .nominatim
                    .ok_or_else(|| anyhow!("Missing Nominatim gateway configuration"))?;
                Some(GeocodingGateway::Nominatim { user_agent })
            }
            Some(raw::GeocodingGateway::Opencage) => {
                let raw::OpenCage { api_key } = gateway
                    .opencage
                    .ok_or_else(|| anyhow!("Missing OpenCage gateway configuration"))?;
                Some(GeocodingGateway::OpenCage { api_key })
            }
            None => None,
        };

        Ok(Self {
            reference_point,
            distance_unit,
            address_mode,
            geocoding: Geocoding {
                gateway: geocoding_gateway,
            },
        })
    }
}
