mod work_order;

pub use work_order::WorkOrder;
