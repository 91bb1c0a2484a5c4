//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the router from configuration
//! - Bind the listener and begin accepting traffic
//! - Hand back a handle that can stop the service gracefully
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and surfaces to the caller
//! - Single attempt, no retries
//! - `stop()` resolves only after in-flight connections have drained

use std::io;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::shutdown::Shutdown;
use crate::config::ServiceConfig;
use crate::http::HttpServer;

/// Error starting the service.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The listener could not be bound (e.g., port already in use).
    #[error("failed to bind listener: {0}")]
    Bind(#[from] io::Error),

    /// A configured cross-origin value is not a valid header value.
    #[error("invalid cross-origin header value: {0}")]
    CrossOrigin(#[from] axum::http::header::InvalidHeaderValue),
}

/// A running service instance.
#[derive(Debug)]
pub struct ServiceHandle {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    serve_task: JoinHandle<io::Result<()>>,
}

impl ServiceHandle {
    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop the service, resolving once in-flight connections have closed
    /// and the port is released. Serve-loop errors are logged, not returned.
    pub async fn stop(self) {
        self.shutdown.trigger();
        match self.serve_task.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::warn!(error = %err, "Serve loop ended with error"),
            Err(err) => tracing::warn!(error = %err, "Serve task failed"),
        }
    }
}

/// Start the service described by `config`.
///
/// When this returns `Ok`, the listener is bound and accepting connections.
pub async fn start(config: ServiceConfig) -> Result<ServiceHandle, StartupError> {
    let server = HttpServer::new(&config)?;
    let listener = TcpListener::bind(config.listener.bind_address.as_str()).await?;
    let local_addr = listener.local_addr()?;

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let serve_task = tokio::spawn(server.run(listener, rx));

    tracing::info!(address = %local_addr, "Service started");
    Ok(ServiceHandle {
        local_addr,
        shutdown,
        serve_task,
    })
}
