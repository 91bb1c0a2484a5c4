//! Configuration management subsystem.
//!
//! # Design Decisions
//! - Config is immutable once constructed; the service keeps its own copy
//! - All fields have defaults, so the binary runs with no external input
//!   (the listen port is a compiled-in constant in the entry point)
//! - Tests override individual sections, typically the bind address

pub mod schema;

pub use schema::CrossOriginConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServiceConfig;
