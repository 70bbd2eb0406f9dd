use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::features::potholes::models::PotholeReport;

/// Work order snapshot as served by the backend, with its pothole
/// embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub work_order_id: i64,
    pub pothole_id: i64,
    pub assignment_date: NaiveDate,
    pub estimated_man_hours: f64,
    #[serde(default)]
    pub actual_man_hours: Option<f64>,
    pub pothole: PotholeReport,
}
