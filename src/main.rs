use std::sync::Arc;

use ptrs_client::core::config::Config;
use ptrs_client::features::geocoding::{GeocodeClient, GeocodeValidator};
use ptrs_client::features::map::MapController;
use ptrs_client::features::potholes::{PotholeApi, PotholeClient, ReportService};
use ptrs_client::features::work_orders::{WorkOrderClient, WorkOrderService};
use ptrs_client::shared::cards::Filter;
use ptrs_client::shared::ui::{ConsoleNotifier, ConsolePage, Notifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Single-threaded runtime: the workflow is event-driven, not
    // parallel, and shares mutable selection state across callbacks
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");
    tracing::info!(
        "Jurisdiction: {}, backend: {}",
        config.jurisdiction.county,
        config.backend.base_url
    );

    // UI surfaces
    let notifier = Arc::new(ConsoleNotifier);
    let page = Arc::new(ConsolePage);

    // Initialize geocoding
    let geocode_client = Arc::new(GeocodeClient::new(&config.geocoding));
    let geocode_validator = GeocodeValidator::new(&config.jurisdiction);
    tracing::info!("Geocoding client initialized");

    // Initialize map controller
    let map_controller = Arc::new(MapController::new(
        geocode_client,
        geocode_validator,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    ));
    tracing::info!(
        "Map initialized at ({}, {}), zoom {}",
        config.map.center_latitude,
        config.map.center_longitude,
        config.map.zoom
    );

    // Initialize backend clients and services
    let pothole_client = Arc::new(PotholeClient::new(&config.backend));
    let report_service = ReportService::new(
        Arc::clone(&pothole_client) as Arc<dyn PotholeApi>,
        Arc::clone(&map_controller),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
    );
    tracing::info!("Report service initialized");

    let work_order_client = Arc::new(WorkOrderClient::new(&config.backend));
    let work_order_service = WorkOrderService::new(
        work_order_client,
        pothole_client,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        page,
        config.backend.base_url.clone(),
    );
    tracing::info!("Work order service initialized");

    // Page-load path: render previous reports as map pins
    match report_service.load_previous_reports().await {
        Ok(placed) => {
            for (_, report) in &placed {
                tracing::info!(
                    "Pothole {} at {} ({})",
                    report.pothole_id,
                    report.street_addr,
                    report.repair_status.display()
                );
            }
        }
        Err(e) => tracing::error!("Error: {}", e),
    }

    // Page-load path: render work order cards under the default filter
    match work_order_service.load_cards().await {
        Ok((mut cards, _orders)) => {
            cards.apply_filter(Filter::Active);
            let (active, complete) = cards.counts();
            tracing::info!(
                "{} work orders ({} active, {} complete), {} visible",
                cards.len(),
                active,
                complete,
                cards.visible_count()
            );
            for card in cards.cards().iter().filter(|c| c.visible) {
                for line in &card.lines {
                    tracing::info!("  {}", line);
                }
            }
        }
        Err(e) => tracing::error!("Error: {}", e),
    }

    Ok(())
}
