pub mod clients;
pub mod dtos;
pub mod models;
pub mod services;

pub use clients::{PotholeApi, PotholeClient};
pub use models::{PotholeReport, RepairStatus};
pub use services::ReportService;
