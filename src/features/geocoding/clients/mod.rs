mod geocode_client;

pub use geocode_client::{GeocodeClient, ReverseGeocode};
