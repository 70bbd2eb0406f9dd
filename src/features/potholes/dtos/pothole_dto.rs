use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::map::PendingSelection;
use crate::features::potholes::models::RepairStatus;

/// Raw new-report form fields; the size slider reports 0-100.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PotholeForm {
    #[validate(range(min = 0.0, max = 100.0))]
    pub size: f64,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub other: String,
}

/// POST /api/pothole body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPotholeDto {
    pub street_addr: String,
    pub latitude: f64,
    pub longitude: f64,
    pub size: f64,
    pub location: String,
    pub other_info: String,
}

impl NewPotholeDto {
    /// Combine the validated selection with the form fields,
    /// normalizing the raw slider value to the 0-10 scale.
    pub fn from_parts(selection: &PendingSelection, form: &PotholeForm) -> Self {
        Self {
            street_addr: selection.address.clone(),
            latitude: selection.latitude,
            longitude: selection.longitude,
            size: form.size / 10.0,
            location: form.location.clone(),
            other_info: form.other.clone(),
        }
    }
}

/// PATCH /api/pothole body
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRepairStatusDto {
    pub repair_status: RepairStatus,
}
