//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits; every section has a `Default` so the binary
//! can run without any external configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the address service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Cross-origin response header values.
    pub cross_origin: CrossOriginConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:11315").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:11315".to_string(),
        }
    }
}

/// Values for the cross-origin headers attached to every response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CrossOriginConfig {
    /// Value of the `Access-Control-Allow-Origin` header.
    pub allow_origin: String,

    /// Value of the `Access-Control-Allow-Headers` header.
    pub allow_headers: String,
}

impl Default for CrossOriginConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_headers: "X-Requested-With".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter, overridden by `RUST_LOG` when set.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "address_service=debug,tower_http=debug".to_string(),
        }
    }
}
