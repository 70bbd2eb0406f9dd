pub mod geocoding;
pub mod map;
pub mod potholes;
pub mod work_orders;
