pub mod clients;
pub mod dtos;
pub mod models;
pub mod services;

pub use clients::{WorkOrderApi, WorkOrderClient};
pub use models::WorkOrder;
pub use services::{SortOrder, UpdateFlow, WorkOrderService};
