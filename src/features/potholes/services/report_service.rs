use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::map::{MapController, MarkerId};
use crate::features::potholes::clients::PotholeApi;
use crate::features::potholes::dtos::{NewPotholeDto, PotholeForm};
use crate::features::potholes::models::PotholeReport;
use crate::shared::ui::Notifier;

const MISSING_ADDRESS_MESSAGE: &str = "Please enter an address using the map";
const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit the report, please try again";

/// Report-pothole and view-potholes use cases.
pub struct ReportService {
    api: Arc<dyn PotholeApi>,
    controller: Arc<MapController>,
    notifier: Arc<dyn Notifier>,
}

impl ReportService {
    pub fn new(
        api: Arc<dyn PotholeApi>,
        controller: Arc<MapController>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            controller,
            notifier,
        }
    }

    /// Submit the new-report form.
    ///
    /// Refused outright while no jurisdiction-valid pin has been
    /// placed; on success the pending selection is consumed.
    pub async fn submit(&self, form: &PotholeForm) -> Result<()> {
        let selection = self.controller.selection().await;

        if !selection.is_submittable() {
            self.notifier.alert(MISSING_ADDRESS_MESSAGE);
            return Err(AppError::Validation(MISSING_ADDRESS_MESSAGE.to_string()));
        }

        form.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let dto = NewPotholeDto::from_parts(&selection, form);
        match self.api.submit_pothole(&dto).await {
            Ok(()) => {
                self.controller.clear_selection().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Report submission failed: {}", e);
                self.notifier.alert(SUBMIT_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    /// Page-load path: fetch all prior reports and drop one blue pin
    /// per record. A backend failure fails this request only.
    pub async fn load_previous_reports(&self) -> Result<Vec<(MarkerId, PotholeReport)>> {
        let reports = self.api.list_potholes().await?;

        let mut placed = Vec::with_capacity(reports.len());
        for report in reports {
            let marker_id = self.controller.place_report_marker(report.coordinate()).await;
            placed.push((marker_id, report));
        }

        tracing::info!("Rendered {} previous reports", placed.len());
        Ok(placed)
    }

    /// Detail panel shown when a report's marker or card is clicked.
    pub fn detail_panel(report: &PotholeReport) -> Vec<(String, String)> {
        vec![
            ("Street Address:".to_string(), report.street_addr.clone()),
            ("Size:".to_string(), format!("{}/10", report.size)),
            (
                "Repair Status:".to_string(),
                report.repair_status.display(),
            ),
            ("Report Date:".to_string(), report.report_date.to_string()),
            (
                "Expected Completion Date:".to_string(),
                report.expected_completion.to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::JurisdictionConfig;
    use crate::features::geocoding::models::{
        AddressComponent, GeocodeResponse, GeocodeResult,
    };
    use crate::features::geocoding::{GeocodeValidator, ReverseGeocode};
    use crate::features::potholes::models::RepairStatus;
    use crate::shared::types::Coordinate;
    use crate::shared::ui::test_support::RecordingNotifier;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        submitted: Mutex<Vec<NewPotholeDto>>,
        reports: Mutex<Vec<PotholeReport>>,
        fail_submit: bool,
    }

    #[async_trait]
    impl PotholeApi for RecordingApi {
        async fn list_potholes(&self) -> Result<Vec<PotholeReport>> {
            Ok(self.reports.lock().unwrap().clone())
        }

        async fn submit_pothole(&self, report: &NewPotholeDto) -> Result<()> {
            if self.fail_submit {
                return Err(AppError::ExternalService("connection refused".to_string()));
            }
            self.submitted.lock().unwrap().push(report.clone());
            Ok(())
        }

        async fn update_repair_status(
            &self,
            _pothole_id: i64,
            _status: RepairStatus,
        ) -> Result<()> {
            Ok(())
        }
    }

    struct InCountyGeocoder;

    #[async_trait]
    impl ReverseGeocode for InCountyGeocoder {
        async fn reverse_geocode(&self, _coordinate: Coordinate) -> Result<GeocodeResponse> {
            Ok(GeocodeResponse {
                results: vec![GeocodeResult {
                    formatted_address: "123 Main St, Indiana, PA 15701, USA".to_string(),
                    address_components: vec![AddressComponent {
                        long_name: "Indiana County".to_string(),
                        short_name: "Indiana County".to_string(),
                        types: vec!["administrative_area_level_2".to_string()],
                    }],
                }],
                status: "OK".to_string(),
            })
        }
    }

    fn controller(notifier: Arc<RecordingNotifier>) -> Arc<MapController> {
        let validator = GeocodeValidator::new(&JurisdictionConfig {
            county: "Indiana County".to_string(),
            country_suffix: ", USA".to_string(),
        });
        Arc::new(MapController::new(
            Arc::new(InCountyGeocoder),
            validator,
            notifier,
        ))
    }

    fn form() -> PotholeForm {
        PotholeForm {
            size: 70.0,
            location: "right_lane".to_string(),
            other: String::new(),
        }
    }

    fn sample_report(id: i64, status: RepairStatus) -> PotholeReport {
        PotholeReport {
            pothole_id: id,
            street_addr: "123 Main St, Indiana, PA 15701".to_string(),
            latitude: 40.62,
            longitude: -79.15,
            size: 6.0,
            location: "right_lane".to_string(),
            repair_status: status,
            repair_type: "asphalt".to_string(),
            repair_priority: "major".to_string(),
            report_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            expected_completion: chrono::NaiveDate::from_ymd_opt(2024, 3, 19).unwrap(),
            other_info: String::new(),
        }
    }

    #[tokio::test]
    async fn test_submit_without_validated_pin_is_blocked() {
        let notifier = Arc::new(RecordingNotifier::default());
        let api = Arc::new(RecordingApi::default());
        let service = ReportService::new(
            Arc::clone(&api) as Arc<dyn PotholeApi>,
            controller(Arc::clone(&notifier)),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );

        let err = service.submit(&form()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        // No POST was issued
        assert!(api.submitted.lock().unwrap().is_empty());
        assert_eq!(
            notifier.messages(),
            vec!["Please enter an address using the map".to_string()]
        );
    }

    #[tokio::test]
    async fn test_submit_with_validated_pin_posts_once_and_clears_selection() {
        let notifier = Arc::new(RecordingNotifier::default());
        let api = Arc::new(RecordingApi::default());
        let controller = controller(Arc::clone(&notifier));
        let service = ReportService::new(
            Arc::clone(&api) as Arc<dyn PotholeApi>,
            Arc::clone(&controller),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );

        controller.select(Coordinate::new(40.62, -79.15)).await;
        service.submit(&form()).await.unwrap();

        let submitted = api.submitted.lock().unwrap().clone();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].street_addr, "123 Main St, Indiana, PA 15701");
        assert_eq!(submitted[0].latitude, 40.62);
        assert_eq!(submitted[0].size, 7.0);

        // Selection is consumed on success
        assert!(!controller.selection().await.is_submittable());
    }

    #[tokio::test]
    async fn test_submit_transport_failure_is_surfaced() {
        let notifier = Arc::new(RecordingNotifier::default());
        let api = Arc::new(RecordingApi {
            fail_submit: true,
            ..Default::default()
        });
        let controller = controller(Arc::clone(&notifier));
        let service = ReportService::new(
            Arc::clone(&api) as Arc<dyn PotholeApi>,
            Arc::clone(&controller),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );

        controller.select(Coordinate::new(40.62, -79.15)).await;
        let err = service.submit(&form()).await.unwrap_err();

        assert!(matches!(err, AppError::ExternalService(_)));
        assert_eq!(
            notifier.messages(),
            vec!["Failed to submit the report, please try again".to_string()]
        );
        // Selection survives so the user can retry
        assert!(controller.selection().await.is_submittable());
    }

    #[tokio::test]
    async fn test_load_previous_reports_places_one_marker_per_record() {
        let notifier = Arc::new(RecordingNotifier::default());
        let api = Arc::new(RecordingApi::default());
        api.reports.lock().unwrap().extend([
            sample_report(1, RepairStatus::NotRepaired),
            sample_report(2, RepairStatus::Repaired),
        ]);
        let controller = controller(Arc::clone(&notifier));
        let service = ReportService::new(
            Arc::clone(&api) as Arc<dyn PotholeApi>,
            Arc::clone(&controller),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        );

        let placed = service.load_previous_reports().await.unwrap();

        assert_eq!(placed.len(), 2);
        // new-report marker plus one blue pin per report
        assert_eq!(controller.marker_count().await, 3);
    }

    #[test]
    fn test_detail_panel_lines() {
        let report = sample_report(7, RepairStatus::TemporarilyRepaired);
        let panel = ReportService::detail_panel(&report);

        assert_eq!(panel[0].1, "123 Main St, Indiana, PA 15701");
        assert_eq!(panel[1].1, "6/10");
        assert_eq!(panel[2].1, "Temporarily Repaired");
        assert_eq!(panel[3].1, "2024-03-05");
        assert_eq!(panel[4].1, "2024-03-19");
    }
}
