//! Structured logging setup for a server process.
//!
//! Builds a JSON console logger, an optional append-only JSON file logger and
//! a tee over both, then redirects the process-wide `tracing` default and the
//! `log` facade to the selected logger.

pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::{LoggerConfig, ServerConfig};
pub use observability::{setup_logging, Logger, Loggers, LoggingError};
