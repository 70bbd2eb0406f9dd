mod report_link;
mod work_order_service;

pub use report_link::{report_url, SortOrder};
pub use work_order_service::{UpdateFlow, WorkOrderService};
