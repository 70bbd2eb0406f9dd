use crate::core::config::JurisdictionConfig;
use crate::core::error::{AppError, Result};
use crate::features::geocoding::models::GeocodeResponse;
use crate::shared::text::strip_country_suffix;

/// Enforces the jurisdiction-membership constraint on reverse-geocode
/// results and produces the display form of accepted addresses.
pub struct GeocodeValidator {
    county: String,
    country_suffix: String,
}

impl GeocodeValidator {
    pub fn new(config: &JurisdictionConfig) -> Self {
        Self {
            county: config.county.clone(),
            country_suffix: config.country_suffix.clone(),
        }
    }

    /// Validate a geocode response against the configured county.
    ///
    /// Returns the formatted address minus the country suffix, or
    /// `JurisdictionRejected` when the pin resolved outside the county
    /// (or to no county at all - membership cannot be proven then).
    pub fn validate(&self, response: &GeocodeResponse) -> Result<String> {
        let result = response.best_result().ok_or_else(|| {
            AppError::ExternalService("Geocoder returned no results".to_string())
        })?;

        match result.county() {
            Some(county) if county == self.county => {}
            Some(county) => {
                tracing::debug!("Pin resolved to {}, outside {}", county, self.county);
                return Err(self.rejection());
            }
            None => {
                tracing::debug!("Geocode result carries no county component");
                return Err(self.rejection());
            }
        }

        Ok(strip_country_suffix(
            &result.formatted_address,
            &self.country_suffix,
        ))
    }

    fn rejection(&self) -> AppError {
        AppError::JurisdictionRejected(format!("Chosen pin is not within {}", self.county))
    }
}
