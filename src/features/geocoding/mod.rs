pub mod clients;
pub mod models;
pub mod services;

pub use clients::{GeocodeClient, ReverseGeocode};
pub use services::GeocodeValidator;
