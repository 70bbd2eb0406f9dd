use crate::shared::types::Coordinate;

/// Transient in-progress report selection, scoped to one report.
///
/// The address only becomes non-empty after a successful,
/// jurisdiction-valid geocode; submission is gated on that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingSelection {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl PendingSelection {
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.latitude = coordinate.latitude;
        self.longitude = coordinate.longitude;
        // A new pin invalidates any previously resolved address
        self.address.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_submittable(&self) -> bool {
        !self.address.is_empty()
    }
}
