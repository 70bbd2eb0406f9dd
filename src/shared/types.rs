use serde::{Deserialize, Serialize};

/// WGS84 geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// List envelope the backend wraps collection responses in: `{ "data": [...] }`
#[derive(Debug, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}
