mod pothole;

pub use pothole::{PotholeReport, RepairStatus};
