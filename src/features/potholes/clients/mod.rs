mod pothole_client;

pub use pothole_client::{PotholeApi, PotholeClient};
