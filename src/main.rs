//! EV booking service entry point
//!
//! Reads configuration from TOML file (~/.config/ev-booking/config.toml),
//! seeds the in-memory store with demo stations and serves the REST API.

use std::sync::Arc;

use tracing::{error, info};

use ev_booking::application::BookingService;
use ev_booking::config::AppConfig;
use ev_booking::support::ShutdownSignal;
use ev_booking::{create_api_router, default_config_path, InMemoryStorage, Storage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("EV_BOOKING_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg.logging.level);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg.logging.level);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!("Starting EV booking service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus metrics recorder: {}", e))?;
    info!("Prometheus metrics recorder installed");

    // ── Storage & services ─────────────────────────────────────
    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
    let stations = storage.list_stations().await?;
    info!("Seeded {} demo stations", stations.len());

    let service = Arc::new(BookingService::new(
        storage,
        config.booking.closing_hour,
    ));

    // ── HTTP server ────────────────────────────────────────────
    let router = create_api_router(service, prometheus_handle);

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("REST API listening on http://{}", address);
    info!("Swagger UI available at http://{}/docs", address);

    let shutdown = ShutdownSignal::new();
    shutdown.listen_for_ctrl_c();

    let wait_for_shutdown = {
        let shutdown = shutdown.clone();
        async move { shutdown.wait().await }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_shutdown)
        .await?;

    info!("EV booking service stopped");
    Ok(())
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}
