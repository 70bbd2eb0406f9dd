use async_trait::async_trait;

use crate::core::config::BackendConfig;
use crate::core::error::{AppError, Result};
use crate::features::work_orders::dtos::UpdateManHoursDto;
use crate::features::work_orders::models::WorkOrder;
use crate::shared::types::DataEnvelope;

/// Backend seam for work order operations.
#[async_trait]
pub trait WorkOrderApi: Send + Sync {
    async fn list_work_orders(&self) -> Result<Vec<WorkOrder>>;
    async fn update_man_hours(&self, work_order_id: i64, actual_man_hours: f64) -> Result<()>;
}

/// HTTP client for the work-order endpoints of the backend REST API
pub struct WorkOrderClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl WorkOrderClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(config.request_timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl WorkOrderApi for WorkOrderClient {
    /// GET /api/work-orders
    async fn list_work_orders(&self) -> Result<Vec<WorkOrder>> {
        let url = format!("{}/api/work-orders", self.base_url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch work orders: {}", e);
            AppError::ExternalService(format!("Failed to fetch work orders: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Backend error fetching work orders: HTTP {}", status);
            return Err(AppError::ExternalService(format!(
                "Backend returned HTTP {}",
                status
            )));
        }

        let envelope = response
            .json::<DataEnvelope<WorkOrder>>()
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse work orders response: {}", e);
                AppError::Parse(format!("Failed to parse work orders response: {}", e))
            })?;

        Ok(envelope.data)
    }

    /// PATCH /api/work-order?work_order_id=<id>
    async fn update_man_hours(&self, work_order_id: i64, actual_man_hours: f64) -> Result<()> {
        let url = format!("{}/api/work-order", self.base_url);
        let body = UpdateManHoursDto { actual_man_hours };

        let response = self
            .http_client
            .patch(&url)
            .query(&[("work_order_id", work_order_id)])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to update work order {}: {}", work_order_id, e);
                AppError::ExternalService(format!("Failed to update work order: {}", e))
            })?;

        let status = response.status();
        let _ = response.text().await;

        if !status.is_success() {
            tracing::error!(
                "Backend rejected work order {} update: HTTP {}",
                work_order_id,
                status
            );
            return Err(AppError::ExternalService(format!(
                "Backend returned HTTP {}",
                status
            )));
        }

        Ok(())
    }
}
