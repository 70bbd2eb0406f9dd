mod geocode;

pub use geocode::{AddressComponent, GeocodeResponse, GeocodeResult, COUNTY_COMPONENT_TYPE};
