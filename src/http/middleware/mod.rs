//! Middleware applied across all routes.

pub mod cross_origin;

pub use cross_origin::{cross_origin_middleware, CrossOrigin};
