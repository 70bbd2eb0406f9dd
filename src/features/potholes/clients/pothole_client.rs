use async_trait::async_trait;

use crate::core::config::BackendConfig;
use crate::core::error::{AppError, Result};
use crate::features::potholes::dtos::{NewPotholeDto, UpdateRepairStatusDto};
use crate::features::potholes::models::{PotholeReport, RepairStatus};
use crate::shared::types::DataEnvelope;

/// Backend seam for pothole report operations.
#[async_trait]
pub trait PotholeApi: Send + Sync {
    async fn list_potholes(&self) -> Result<Vec<PotholeReport>>;
    async fn submit_pothole(&self, report: &NewPotholeDto) -> Result<()>;
    async fn update_repair_status(&self, pothole_id: i64, status: RepairStatus) -> Result<()>;
}

/// HTTP client for the pothole endpoints of the backend REST API
pub struct PotholeClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl PotholeClient {
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
impl PotholeApi for PotholeClient {
    /// GET /api/potholes
    async fn list_potholes(&self) -> Result<Vec<PotholeReport>> {
        let url = format!("{}/api/potholes", self.base_url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Failed to fetch potholes: {}", e);
            AppError::ExternalService(format!("Failed to fetch potholes: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Backend error fetching potholes: HTTP {}", status);
            return Err(AppError::ExternalService(format!(
                "Backend returned HTTP {}",
                status
            )));
        }

        let envelope = response
            .json::<DataEnvelope<PotholeReport>>()
            .await
            .map_err(|e| {
                tracing::error!("Failed to parse potholes response: {}", e);
                AppError::Parse(format!("Failed to parse potholes response: {}", e))
            })?;

        Ok(envelope.data)
    }

    /// POST /api/pothole
    ///
    /// The response body is read but not needed by the caller.
    async fn submit_pothole(&self, report: &NewPotholeDto) -> Result<()> {
        let url = format!("{}/api/pothole", self.base_url);

        tracing::debug!("Submitting pothole report at {}", report.street_addr);

        let response = self
            .http_client
            .post(&url)
            .json(report)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to submit pothole report: {}", e);
                AppError::ExternalService(format!("Failed to submit pothole report: {}", e))
            })?;

        let status = response.status();
        let _ = response.text().await;

        if !status.is_success() {
            tracing::error!("Backend rejected pothole report: HTTP {}", status);
            return Err(AppError::ExternalService(format!(
                "Backend returned HTTP {}",
                status
            )));
        }

        tracing::info!("Pothole report submitted: {}", report.street_addr);
        Ok(())
    }

    /// PATCH /api/pothole?pothole_id=<id>
    async fn update_repair_status(&self, pothole_id: i64, status: RepairStatus) -> Result<()> {
        let url = format!("{}/api/pothole", self.base_url);
        let body = UpdateRepairStatusDto {
            repair_status: status,
        };

        let response = self
            .http_client
            .patch(&url)
            .query(&[("pothole_id", pothole_id)])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to update pothole {}: {}", pothole_id, e);
                AppError::ExternalService(format!("Failed to update pothole: {}", e))
            })?;

        let http_status = response.status();
        let _ = response.text().await;

        if !http_status.is_success() {
            tracing::error!(
                "Backend rejected pothole {} update: HTTP {}",
                pothole_id,
                http_status
            );
            return Err(AppError::ExternalService(format!(
                "Backend returned HTTP {}",
                http_status
            )));
        }

        Ok(())
    }
}
