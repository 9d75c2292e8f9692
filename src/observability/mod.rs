//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LoggerConfig (level, file, stdout)
//!     → level.rs (string → LevelFilter)
//!     → destination.rs (stdout / append-only file, mutex guarded)
//!     → encoder.rs (one JSON line per event)
//!     → logger.rs (Logger handle: sinks + tracing Dispatch, tee, named)
//!     → logging.rs (assemble active/general loggers, redirect globals)
//!     → bridge.rs (`log` records pinned to the active logger)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Every sink keeps its own threshold, so a tee never widens or narrows
//!   what an individual sink accepts
//! - Loggers are passed explicitly; the global redirect is a shim for code
//!   that still logs through bare `tracing`/`log` macros

pub mod bridge;
pub mod destination;
pub mod encoder;
pub mod error;
pub mod level;
pub mod logger;
pub mod logging;

pub use bridge::LogBridge;
pub use destination::Destination;
pub use encoder::JsonLayer;
pub use error::LoggingError;
pub use level::parse_level;
pub use logger::{Logger, Sink};
pub use logging::{assemble, new_json_file_logger, redirect_std_log, setup_logging, Loggers};

/// Target reserved for fatal records; the encoder renders them as `"fatal"`.
pub const FATAL_TARGET: &str = "fatal";

/// Emit a fatal record.
///
/// `tracing` has no level above `ERROR`, so fatal records are error events on
/// [`FATAL_TARGET`]. Emitting one never terminates the process; that decision
/// belongs to the caller.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        ::tracing::error!(target: $crate::observability::FATAL_TARGET, $($arg)+)
    };
}
