//! Logging setup errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while assembling the logging subsystem.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured log file could not be opened for appending.
    #[error("could not create log file {}: {source}", path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tee needs at least one logger to forward to.
    #[error("cannot build a tee over zero loggers")]
    EmptyTee,

    /// A global `tracing` dispatcher was already installed.
    #[error("global dispatcher already set: {0}")]
    Dispatcher(#[from] tracing::dispatcher::SetGlobalDefaultError),

    /// The `log` facade already has a logger.
    #[error("log facade already redirected: {0}")]
    LogBridge(#[from] log::SetLoggerError),
}
