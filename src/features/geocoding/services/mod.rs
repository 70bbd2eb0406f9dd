mod geocode_validator;

pub use geocode_validator::GeocodeValidator;
