//! Address service binary.
//!
//! Starts the HTTP service on a fixed port and runs until interrupted.

use address_service::config::ServiceConfig;
use address_service::{lifecycle, observability};

/// Port the service listens on.
const SERVICE_PORT: u16 = 11315;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = format!("0.0.0.0:{SERVICE_PORT}");

    observability::logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "address-service starting"
    );

    let handle = lifecycle::start(config).await?;
    tracing::info!(address = %handle.local_addr(), "Listening for connections");

    lifecycle::signals::shutdown_signal().await;
    handle.stop().await;

    tracing::info!("Shutdown complete");
    Ok(())
}
