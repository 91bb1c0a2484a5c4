//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route registration)
//!     → middleware (cross-origin headers on every response)
//!     → handlers.rs (CRUD over the address store, echo)
//!     → JSON response to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
