//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; per-request spans come from
//!   tower-http's trace layer
//! - No metrics endpoint; logging is the only output

pub mod logging;
