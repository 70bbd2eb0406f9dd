mod marker;
mod selection;

pub use marker::{Marker, MarkerId, MarkerStore, PinStyle, NEW_REPORT_MARKER};
pub use selection::PendingSelection;
