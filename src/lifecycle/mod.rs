//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build router → Bind listener → Spawn serve loop → ServiceHandle
//!
//! Shutdown (shutdown.rs):
//!     stop() → Stop accepting → Drain connections → Port released
//!
//! Signals (signals.rs):
//!     SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Startup is a single attempt: it either succeeds or reports the error
//! - `stop()` never fails; serve-loop errors are logged and swallowed

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{start, ServiceHandle, StartupError};
