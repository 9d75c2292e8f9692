//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the server process.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Service name, attached to application log records as `logger`.
    pub name: String,

    /// Logging settings.
    pub logger: LoggerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "server".to_string(),
            logger: LoggerConfig::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level (debug, info, warn, error). Anything else means info.
    pub level: String,

    /// Log file path. Empty disables the file sink.
    pub file: String,

    /// Also send redirected global logging to the console when a file is set.
    pub stdout: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: String::new(),
            stdout: false,
        }
    }
}
