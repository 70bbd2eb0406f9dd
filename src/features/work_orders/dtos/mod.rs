mod work_order_dto;

pub use work_order_dto::{UpdateManHoursDto, WorkOrderUpdateForm};
