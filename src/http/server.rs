//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (cross-origin headers, tracing)
//! - Serve requests on a bound listener
//! - Drain connections on shutdown

use axum::http::header::InvalidHeaderValue;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, put};
use axum::Router;
use std::io;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::middleware::{cross_origin_middleware, CrossOrigin};
use crate::store::AddressStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: AddressStore,
    pub cross_origin: CrossOrigin,
}

/// HTTP server for the address service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails when a configured cross-origin value is not a valid header
    /// value.
    pub fn new(config: &ServiceConfig) -> Result<Self, InvalidHeaderValue> {
        let state = AppState {
            store: AddressStore::new(),
            cross_origin: CrossOrigin::from_config(&config.cross_origin)?,
        };
        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(
                "/address/{id}",
                put(handlers::create_address)
                    .post(handlers::update_address)
                    .delete(handlers::delete_address),
            )
            .route("/addresses", get(handlers::list_addresses))
            .route("/echo/{msg}", get(handlers::echo))
            .layer(from_fn_with_state(state.clone(), cross_origin_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Serve requests on `listener` until `shutdown` fires, then drain
    /// in-flight connections before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown requested, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
