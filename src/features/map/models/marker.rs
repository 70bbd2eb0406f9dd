use std::collections::HashMap;

use crate::shared::types::Coordinate;

/// Stable key for a marker in the store. Replacing a marker is an
/// overwrite under its id, so no stale handle can outlive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u32);

/// Id of the single "new report" marker tracking the in-progress pin.
pub const NEW_REPORT_MARKER: MarkerId = MarkerId(0);

/// Pin styling: red for the in-progress report, blue for prior reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinStyle {
    Red,
    Blue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pin: PinStyle,
    pub position: Option<Coordinate>,
}

impl Marker {
    /// Marker not yet placed on the map surface.
    pub fn unplaced(pin: PinStyle) -> Self {
        Self {
            pin,
            position: None,
        }
    }

    pub fn at(pin: PinStyle, position: Coordinate) -> Self {
        Self {
            pin,
            position: Some(position),
        }
    }
}

/// Owned collection of the markers currently on the map.
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: HashMap<MarkerId, Marker>,
    next_id: u32,
}

impl MarkerStore {
    pub fn new() -> Self {
        let mut store = Self {
            markers: HashMap::new(),
            // Id 0 is reserved for the new-report marker
            next_id: 1,
        };
        store.place(NEW_REPORT_MARKER, Marker::unplaced(PinStyle::Red));
        store
    }

    /// Insert or overwrite the marker stored under `id`.
    pub fn place(&mut self, id: MarkerId, marker: Marker) {
        self.markers.insert(id, marker);
    }

    /// Add a marker under a fresh id (used for fetched report pins).
    pub fn add(&mut self, marker: Marker) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.markers.insert(id, marker);
        id
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    pub fn move_to(&mut self, id: MarkerId, position: Coordinate) {
        if let Some(marker) = self.markers.get_mut(&id) {
            marker.position = Some(position);
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
