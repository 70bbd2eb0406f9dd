use async_trait::async_trait;

use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};
use crate::features::geocoding::models::GeocodeResponse;
use crate::shared::types::Coordinate;

/// Provider seam for reverse geocoding: given a coordinate, return a
/// formatted address plus structured components, or fail.
#[async_trait]
pub trait ReverseGeocode: Send + Sync {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<GeocodeResponse>;
}

/// HTTP client for a Google-style reverse geocoding endpoint
pub struct GeocodeClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeocodeClient {
    pub fn new(config: &GeocodingConfig) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .user_agent("PtrsClient/1.0 (pothole-reporting)")
                .timeout(config.request_timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl ReverseGeocode for GeocodeClient {
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<GeocodeResponse> {
        let mut url = format!(
            "{}/maps/api/geocode/json?latlng={},{}",
            self.base_url, coordinate.latitude, coordinate.longitude
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(&urlencoding::encode(key));
        }

        tracing::debug!(
            "Reverse geocoding ({}, {})",
            coordinate.latitude,
            coordinate.longitude
        );

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Reverse geocode request failed: {:?}", e);
            AppError::ExternalService(format!("Reverse geocode request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Geocoder returned status: {}", status);
            return Err(AppError::ExternalService(format!(
                "Geocoder returned HTTP {}",
                status
            )));
        }

        response.json::<GeocodeResponse>().await.map_err(|e| {
            tracing::error!("Failed to parse geocoder response: {:?}", e);
            AppError::Parse(format!("Failed to parse geocoder response: {}", e))
        })
    }
}
