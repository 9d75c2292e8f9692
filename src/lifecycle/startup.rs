//! Startup orchestration.

use crate::config::ServerConfig;
use crate::observability::{parse_level, setup_logging, Loggers, LoggingError};

/// Install logging for `config` and report the resulting setup.
///
/// The returned general logger is named after the service.
pub fn start(config: &ServerConfig) -> Result<Loggers, LoggingError> {
    let loggers = setup_logging(&config.logger)?;
    let general = loggers.general.named(&config.name);

    general.in_scope(|| {
        tracing::info!(
            level = %parse_level(&config.logger.level),
            file = %config.logger.file,
            stdout = config.logger.stdout,
            version = env!("CARGO_PKG_VERSION"),
            "Logging configured"
        )
    });

    Ok(Loggers {
        active: loggers.active,
        general,
    })
}
