//! `log` facade bridge pinned to one logger.

use log::{LevelFilter, Log, Metadata, Record};
use tracing::dispatcher::{self, Dispatch};

/// Forwards `log` records to a fixed dispatcher.
///
/// Records go to the dispatcher given at construction even when the calling
/// thread runs under another logger, so legacy logging always lands on the
/// active logger.
pub struct LogBridge {
    dispatch: Dispatch,
    level: LevelFilter,
}

impl LogBridge {
    pub fn new(dispatch: Dispatch, level: LevelFilter) -> Self {
        Self { dispatch, level }
    }

    /// Install as the process-wide `log` logger.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            dispatcher::with_default(&self.dispatch, || {
                let _ = tracing_log::format_trace(record);
            });
        }
    }

    fn flush(&self) {}
}
