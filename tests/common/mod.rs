//! Shared utilities for integration testing.

use address_service::config::ServiceConfig;
use address_service::lifecycle::{self, ServiceHandle};

/// Start the service on an ephemeral port, returning the handle and the
/// base URL for requests against it.
pub async fn start_service() -> (ServiceHandle, String) {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let handle = lifecycle::start(config)
        .await
        .expect("service failed to start");
    let base_url = format!("http://{}", handle.local_addr());
    (handle, base_url)
}
