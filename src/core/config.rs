use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub geocoding: GeocodingConfig,
    pub jurisdiction: JurisdictionConfig,
    pub map: MapConfig,
}

/// Backend REST API the reports and work orders live in
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

/// External reverse-geocoding provider
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
}

/// Jurisdiction-membership constraint applied to geocoded pins
#[derive(Debug, Clone)]
pub struct JurisdictionConfig {
    /// County a pin must resolve to before a report can be submitted
    pub county: String,
    /// Suffix removed from the provider's formatted address for display
    pub country_suffix: String,
}

/// Initial map viewport
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            backend: BackendConfig::from_env()?,
            geocoding: GeocodingConfig::from_env()?,
            jurisdiction: JurisdictionConfig::from_env()?,
            map: MapConfig::from_env()?,
        })
    }
}

impl BackendConfig {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("BACKEND_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

        let request_timeout_secs = env::var("BACKEND_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "BACKEND_REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

impl GeocodingConfig {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("GEOCODE_BASE_URL")
            .unwrap_or_else(|_| "https://maps.googleapis.com".to_string());

        // Only use the key if it is non-empty
        let api_key = env::var("GEOCODE_API_KEY").ok().filter(|s| !s.is_empty());

        let request_timeout_secs = env::var("GEOCODE_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "GEOCODE_REQUEST_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

impl JurisdictionConfig {
    pub fn from_env() -> Result<Self, String> {
        let county =
            env::var("JURISDICTION_COUNTY").unwrap_or_else(|_| "Indiana County".to_string());
        if county.trim().is_empty() {
            return Err("JURISDICTION_COUNTY must not be empty".to_string());
        }

        let country_suffix =
            env::var("JURISDICTION_COUNTRY_SUFFIX").unwrap_or_else(|_| ", USA".to_string());

        Ok(Self {
            county,
            country_suffix,
        })
    }
}

impl MapConfig {
    // Viewport centered on Indiana County, PA
    const DEFAULT_CENTER_LATITUDE: f64 = 40.66062326610511;
    const DEFAULT_CENTER_LONGITUDE: f64 = -79.06163481811751;
    const DEFAULT_ZOOM: u8 = 10;
    const DEFAULT_MIN_ZOOM: u8 = 10;
    const DEFAULT_MAX_ZOOM: u8 = 20;

    pub fn from_env() -> Result<Self, String> {
        let center_latitude = env::var("MAP_CENTER_LATITUDE")
            .unwrap_or_else(|_| Self::DEFAULT_CENTER_LATITUDE.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_CENTER_LATITUDE must be a valid number".to_string())?;

        let center_longitude = env::var("MAP_CENTER_LONGITUDE")
            .unwrap_or_else(|_| Self::DEFAULT_CENTER_LONGITUDE.to_string())
            .parse::<f64>()
            .map_err(|_| "MAP_CENTER_LONGITUDE must be a valid number".to_string())?;

        let zoom = env::var("MAP_ZOOM")
            .unwrap_or_else(|_| Self::DEFAULT_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_ZOOM must be a valid number".to_string())?;

        let min_zoom = env::var("MAP_MIN_ZOOM")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_MIN_ZOOM must be a valid number".to_string())?;

        let max_zoom = env::var("MAP_MAX_ZOOM")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_ZOOM.to_string())
            .parse::<u8>()
            .map_err(|_| "MAP_MAX_ZOOM must be a valid number".to_string())?;

        if min_zoom > max_zoom {
            return Err("MAP_MIN_ZOOM must not exceed MAP_MAX_ZOOM".to_string());
        }

        Ok(Self {
            center_latitude,
            center_longitude,
            zoom,
            min_zoom,
            max_zoom,
        })
    }
}
