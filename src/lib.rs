//! Address service library.
//!
//! An HTTP service exposing CRUD operations over an in-memory collection of
//! address records, plus an echo endpoint.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::{ServiceHandle, Shutdown};
