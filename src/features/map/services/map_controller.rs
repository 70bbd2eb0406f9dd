use std::sync::Arc;

use tokio::sync::Mutex;

use crate::core::error::AppError;
use crate::features::geocoding::models::GeocodeResponse;
use crate::features::geocoding::{GeocodeValidator, ReverseGeocode};
use crate::features::map::models::{
    Marker, MarkerId, MarkerStore, PendingSelection, PinStyle, NEW_REPORT_MARKER,
};
use crate::shared::types::Coordinate;
use crate::shared::ui::Notifier;

/// State owned by the controller: the pending selection, the marker
/// collection, the visible address field, and the latest geocode token.
#[derive(Debug, Default)]
struct MapState {
    selection: PendingSelection,
    markers: MarkerStore,
    address_field: String,
    latest_token: u64,
}

/// Drives the pin-placement workflow: a map click repositions the
/// new-report marker, records the coordinate, and kicks off an
/// asynchronous reverse geocode whose result is applied only if it is
/// still the latest issued request.
pub struct MapController {
    geocoder: Arc<dyn ReverseGeocode>,
    validator: GeocodeValidator,
    notifier: Arc<dyn Notifier>,
    state: Mutex<MapState>,
}

impl MapController {
    pub fn new(
        geocoder: Arc<dyn ReverseGeocode>,
        validator: GeocodeValidator,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state = MapState {
            markers: MarkerStore::new(),
            ..Default::default()
        };
        Self {
            geocoder,
            validator,
            notifier,
            state: Mutex::new(state),
        }
    }

    /// Handle a map click end to end: record the pin, then geocode and
    /// validate it. Overlapping clicks each get their own token; only
    /// the latest one may write back.
    pub async fn select(&self, coordinate: Coordinate) {
        let token = self.record_click(coordinate).await;

        match self.geocoder.reverse_geocode(coordinate).await {
            Ok(response) => self.apply_geocode(token, &response).await,
            Err(e) => {
                // Transport failure: selection stays unaddressed, so
                // submission remains blocked
                tracing::error!("Reverse geocode failed: {}", e);
            }
        }
    }

    /// Map Interaction Handler half: move the marker, overwrite the
    /// pending coordinate, and issue a fresh request token.
    async fn record_click(&self, coordinate: Coordinate) -> u64 {
        let mut state = self.state.lock().await;
        state.selection.set_coordinate(coordinate);
        state.markers.move_to(NEW_REPORT_MARKER, coordinate);
        state.latest_token += 1;
        state.latest_token
    }

    /// Geocode Validator half: apply a resolved response for `token`,
    /// discarding it when a newer click has been issued since.
    async fn apply_geocode(&self, token: u64, response: &GeocodeResponse) {
        let mut state = self.state.lock().await;
        if token != state.latest_token {
            tracing::debug!(
                "Discarding stale geocode response (token {}, latest {})",
                token,
                state.latest_token
            );
            return;
        }

        match self.validator.validate(response) {
            Ok(address) => {
                state.selection.address = address.clone();
                state.address_field = address;
            }
            Err(AppError::JurisdictionRejected(message)) => {
                state.selection.reset();
                // Replace rather than reuse the in-progress marker
                state
                    .markers
                    .place(NEW_REPORT_MARKER, Marker::unplaced(PinStyle::Red));
                drop(state);
                self.notifier.alert(&message);
            }
            Err(e) => {
                tracing::error!("Reverse geocode failed: {}", e);
            }
        }
    }

    /// Snapshot of the pending selection.
    pub async fn selection(&self) -> PendingSelection {
        self.state.lock().await.selection.clone()
    }

    /// Consumed after a successful submission.
    pub async fn clear_selection(&self) {
        let mut state = self.state.lock().await;
        state.selection.reset();
        state.address_field.clear();
        state
            .markers
            .place(NEW_REPORT_MARKER, Marker::unplaced(PinStyle::Red));
    }

    /// Content of the visible address field.
    pub async fn address_field(&self) -> String {
        self.state.lock().await.address_field.clone()
    }

    /// Drop a blue pin for a previously reported pothole.
    pub async fn place_report_marker(&self, position: Coordinate) -> MarkerId {
        let mut state = self.state.lock().await;
        state.markers.add(Marker::at(PinStyle::Blue, position))
    }

    pub async fn marker(&self, id: MarkerId) -> Option<Marker> {
        self.state.lock().await.markers.get(id).cloned()
    }

    pub async fn marker_count(&self) -> usize {
        self.state.lock().await.markers.len()
    }
}
