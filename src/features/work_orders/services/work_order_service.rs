use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::potholes::clients::PotholeApi;
use crate::features::potholes::models::RepairStatus;
use crate::features::work_orders::clients::WorkOrderApi;
use crate::features::work_orders::dtos::WorkOrderUpdateForm;
use crate::features::work_orders::models::WorkOrder;
use crate::features::work_orders::services::report_link::{report_url, SortOrder};
use crate::shared::cards::{Card, CardClass, CardList};
use crate::shared::text::{humanize_category, title_case};
use crate::shared::ui::{Notifier, PageHandle};

const MISSING_MAN_HOURS_MESSAGE: &str = "Please provide an input for 'Actual Man-Hours'";

/// Lifecycle of a single work-order card's update action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFlow {
    Rendered,
    Confirming,
    PatchIssued,
}

impl UpdateFlow {
    /// Update button clicked: open the confirmation overlay.
    pub fn begin(self) -> Self {
        match self {
            UpdateFlow::Rendered => UpdateFlow::Confirming,
            other => other,
        }
    }

    /// Cancel button: back to the card, state unchanged.
    pub fn cancel(self) -> Self {
        match self {
            UpdateFlow::Confirming => UpdateFlow::Rendered,
            other => other,
        }
    }
}

/// Manage-work-orders use cases: card rendering, the update
/// confirmation flow, and report generation.
pub struct WorkOrderService {
    work_orders: Arc<dyn WorkOrderApi>,
    potholes: Arc<dyn PotholeApi>,
    notifier: Arc<dyn Notifier>,
    page: Arc<dyn PageHandle>,
    backend_base_url: String,
}

impl WorkOrderService {
    pub fn new(
        work_orders: Arc<dyn WorkOrderApi>,
        potholes: Arc<dyn PotholeApi>,
        notifier: Arc<dyn Notifier>,
        page: Arc<dyn PageHandle>,
        backend_base_url: String,
    ) -> Self {
        Self {
            work_orders,
            potholes,
            notifier,
            page,
            backend_base_url,
        }
    }

    /// Page-load path: fetch all work orders and render one card each.
    pub async fn load_cards(&self) -> Result<(CardList, Vec<WorkOrder>)> {
        let orders = self.work_orders.list_work_orders().await?;

        let mut cards = CardList::default();
        for order in &orders {
            cards.push(Self::build_card(order));
        }

        tracing::info!("Rendered {} work order cards", cards.len());
        Ok((cards, orders))
    }

    /// One manage-work-order card, classed active or complete from the
    /// pothole's repair status.
    pub fn build_card(order: &WorkOrder) -> Card {
        let class = if order.pothole.repair_status.is_active() {
            CardClass::Active
        } else {
            CardClass::Complete
        };

        let lines = vec![
            format!("Work Order: {}", order.work_order_id),
            format!("Pothole: {}", order.pothole_id),
            format!("Address: {}", order.pothole.street_addr),
            format!("Assignment Date: {}", order.assignment_date),
            format!(
                "Expected Completion Date: {}",
                order.pothole.expected_completion
            ),
            format!("Size: {}/10", order.pothole.size),
            format!("Location: {}", humanize_category(&order.pothole.location)),
            format!(
                "Repair Priority: {}",
                title_case(&order.pothole.repair_priority)
            ),
            format!("Repair Type: {}", title_case(&order.pothole.repair_type)),
            format!("Estimated Man-Hours: {}", order.estimated_man_hours),
            format!(
                "Repair Status: {}",
                order.pothole.repair_status.display()
            ),
            format!("Other Information: {}", order.pothole.other_info),
        ];

        Card::new(order.work_order_id, class, lines)
    }

    /// Submit the update-confirmation popup.
    ///
    /// The repair-status and man-hours PATCHes are independent
    /// requests; either may fail on its own and is only logged. A
    /// page reload follows regardless, so the next render reflects
    /// whatever the backend accepted.
    pub async fn submit_update(
        &self,
        order: &WorkOrder,
        form: &WorkOrderUpdateForm,
    ) -> Result<UpdateFlow> {
        let needs_man_hours = form.actual_man_hours.is_none()
            && order.pothole.repair_status == RepairStatus::NotRepaired
            && form.repair_status != RepairStatus::Removed;

        if needs_man_hours {
            self.notifier.alert(MISSING_MAN_HOURS_MESSAGE);
            return Err(AppError::Validation(MISSING_MAN_HOURS_MESSAGE.to_string()));
        }

        let status_patch = self
            .potholes
            .update_repair_status(order.pothole_id, form.repair_status);

        // Man-hours are not recorded for removed reports
        let hours_result = match form.actual_man_hours {
            Some(hours) if form.repair_status != RepairStatus::Removed => {
                let hours_patch = self
                    .work_orders
                    .update_man_hours(order.work_order_id, hours);
                let (status_result, hours_result) = futures::join!(status_patch, hours_patch);
                Self::log_patch_failure("repair status", order.pothole_id, status_result);
                Some(hours_result)
            }
            _ => {
                Self::log_patch_failure("repair status", order.pothole_id, status_patch.await);
                None
            }
        };
        if let Some(result) = hours_result {
            Self::log_patch_failure("actual man-hours", order.work_order_id, result);
        }

        self.page.reload();
        Ok(UpdateFlow::PatchIssued)
    }

    /// Open the sorted report in a new tab.
    pub fn generate_report(&self, sort_by: &str, order: SortOrder) {
        let url = report_url(&self.backend_base_url, sort_by, order);
        self.page.open_tab(&url);
    }

    fn log_patch_failure(what: &str, id: i64, result: Result<()>) {
        if let Err(e) = result {
            tracing::error!("Failed to update {} for id {}: {}", what, id, e);
        }
    }
}
