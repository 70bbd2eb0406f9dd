use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::text::title_case;
use crate::shared::types::Coordinate;

/// Repair status enum matching the backend's wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairStatus {
    #[serde(rename = "not repaired")]
    NotRepaired,
    #[serde(rename = "temporarily repaired")]
    TemporarilyRepaired,
    #[serde(rename = "repaired")]
    Repaired,
    #[serde(rename = "removed")]
    Removed,
}

impl RepairStatus {
    /// Only unrepaired potholes count as active in the card view.
    pub fn is_active(self) -> bool {
        matches!(self, RepairStatus::NotRepaired)
    }

    /// Title-cased form for detail panels and cards.
    pub fn display(self) -> String {
        title_case(self.as_wire())
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            RepairStatus::NotRepaired => "not repaired",
            RepairStatus::TemporarilyRepaired => "temporarily repaired",
            RepairStatus::Repaired => "repaired",
            RepairStatus::Removed => "removed",
        }
    }
}

impl std::fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Pothole report snapshot as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotholeReport {
    pub pothole_id: i64,
    pub street_addr: String,
    pub latitude: f64,
    pub longitude: f64,
    /// 0-10 severity scale
    pub size: f64,
    pub location: String,
    pub repair_status: RepairStatus,
    pub repair_type: String,
    pub repair_priority: String,
    pub report_date: NaiveDate,
    pub expected_completion: NaiveDate,
    #[serde(default)]
    pub other_info: String,
}

impl PotholeReport {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
