//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → ServerConfig (defaults fill every missing field)
//!     → CLI overrides applied by the binary
//!     → logger section consumed by observability::setup_logging
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal (or absent) configs
//! - Unknown log levels are not a config error; they resolve to `info`

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::LoggerConfig;
pub use schema::ServerConfig;
