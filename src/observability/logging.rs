//! Logging subsystem assembly.
//!
//! # Responsibilities
//! - Build the console logger and, when configured, the file logger
//! - Decide which logger is active (global redirect target) and which is
//!   handed to application code
//! - Redirect the `tracing` global default and the `log` facade
//!
//! # Design Decisions
//! - A requested but unopenable log file is a startup failure: one fatal
//!   record goes to the console, the error propagates, the binary exits
//! - Without `stdout`, only the file sees redirected global logging while
//!   application logging still reaches both console and file

use std::path::Path;

use tracing_log::AsLog;
use tracing_subscriber::filter::LevelFilter;

use super::bridge::LogBridge;
use super::destination::Destination;
use super::error::LoggingError;
use super::level::parse_level;
use super::logger::Logger;
use crate::config::LoggerConfig;
use crate::fatal;

/// The two loggers produced by assembly.
#[derive(Debug, Clone)]
pub struct Loggers {
    /// Target of the process-wide redirect.
    pub active: Logger,
    /// Logger handed to application code.
    pub general: Logger,
}

/// Build a JSON logger over `path`, or `None` when no path is configured.
///
/// If the file cannot be opened a fatal record is written through `console`
/// before the error is returned.
pub fn new_json_file_logger(
    console: &Logger,
    path: &str,
    level: LevelFilter,
) -> Result<Option<Logger>, LoggingError> {
    if path.is_empty() {
        return Ok(None);
    }

    match Destination::open_append(Path::new(path)) {
        Ok(destination) => Ok(Some(Logger::json(destination, level))),
        Err(source) => {
            console.in_scope(|| fatal!(error = %source, "Could not create log file"));
            Err(LoggingError::OpenLogFile {
                path: path.into(),
                source,
            })
        }
    }
}

/// Assemble loggers for `config`, with console records going to `console`.
///
/// | file | stdout | active        | general       |
/// |------|--------|---------------|---------------|
/// | no   | any    | console       | console       |
/// | yes  | true   | console+file  | console+file  |
/// | yes  | false  | file          | console+file  |
pub fn assemble(config: &LoggerConfig, console: Destination) -> Result<Loggers, LoggingError> {
    let level = parse_level(&config.level);
    let console = Logger::json(console, level);

    let Some(file) = new_json_file_logger(&console, &config.file, level)? else {
        return Ok(Loggers {
            active: console.clone(),
            general: console,
        });
    };

    let multi = Logger::tee(&[console, file.clone()])?;
    if config.stdout {
        Ok(Loggers {
            active: multi.clone(),
            general: multi,
        })
    } else {
        Ok(Loggers {
            active: file,
            general: multi,
        })
    }
}

/// Send bare `tracing` events and `log` records to `logger`.
///
/// `log` records reach `logger` even from code running under another logger's
/// scope. Both globals can be installed once per process; the `log` bridge is
/// installed first, so a failure there leaves neither global touched. If the
/// `tracing` global is already taken, the bridge stays installed.
pub fn redirect_std_log(logger: &Logger) -> Result<(), LoggingError> {
    LogBridge::new(logger.dispatch().clone(), logger.level().as_log()).install()?;
    tracing::dispatcher::set_global_default(logger.dispatch().clone())?;
    Ok(())
}

/// Assemble loggers over process stdout and redirect globals to the active one.
pub fn setup_logging(config: &LoggerConfig) -> Result<Loggers, LoggingError> {
    let loggers = assemble(config, Destination::stdout())?;
    redirect_std_log(&loggers.active)?;
    Ok(loggers)
}
