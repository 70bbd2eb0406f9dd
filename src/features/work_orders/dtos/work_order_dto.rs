use serde::{Deserialize, Serialize};

use crate::features::potholes::models::RepairStatus;

/// PATCH /api/work-order body
#[derive(Debug, Clone, Serialize)]
pub struct UpdateManHoursDto {
    pub actual_man_hours: f64,
}

/// Update-confirmation popup fields: the new status plus the
/// actual-man-hours input, which the user may leave empty.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkOrderUpdateForm {
    pub repair_status: RepairStatus,
    #[serde(default)]
    pub actual_man_hours: Option<f64>,
}
