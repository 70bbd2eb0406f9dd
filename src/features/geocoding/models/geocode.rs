use serde::Deserialize;

/// Address component type that carries the containing county.
pub const COUNTY_COMPONENT_TYPE: &str = "administrative_area_level_2";

/// Reverse-geocode response in the provider's wire format
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub status: String,
}

impl GeocodeResponse {
    pub fn best_result(&self) -> Option<&GeocodeResult> {
        self.results.first()
    }
}

/// One resolved address
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Structured address component
#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl GeocodeResult {
    /// Long name of the containing county, if the provider resolved one.
    pub fn county(&self) -> Option<&str> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == COUNTY_COMPONENT_TYPE))
            .map(|c| c.long_name.as_str())
    }
}
