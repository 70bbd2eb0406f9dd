mod work_order_client;

pub use work_order_client::{WorkOrderApi, WorkOrderClient};
