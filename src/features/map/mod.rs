pub mod models;
pub mod services;

pub use models::{Marker, MarkerId, PendingSelection, PinStyle, NEW_REPORT_MARKER};
pub use services::MapController;
