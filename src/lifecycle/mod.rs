//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Set up logging → Report configuration
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → resolve the shutdown future
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Log → Shutdown::trigger → subscribers (main) finish
//! ```
//!
//! # Design Decisions
//! - Logging is initialized before anything else so later failures are recorded
//! - Startup errors are returned; only `main` decides to exit

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{wait_for_shutdown, Shutdown};
pub use startup::start;
