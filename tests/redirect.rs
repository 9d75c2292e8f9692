//! Process-wide redirection. Globals can be installed once per process, so
//! everything lives in a single test.

use server_logger::config::LoggerConfig;
use server_logger::observability::{assemble, redirect_std_log, LoggingError};

mod common;

use common::{file_records, messages, SharedBuffer};

#[test]
fn test_globals_follow_active_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server.log");
    let console = SharedBuffer::default();

    let loggers = assemble(
        &LoggerConfig {
            level: "debug".to_string(),
            file: path.to_str().unwrap().to_string(),
            stdout: false,
        },
        console.destination(),
    )
    .unwrap();
    redirect_std_log(&loggers.active).unwrap();

    // Outside any scope: file only.
    tracing::info!("bare tracing");
    log::warn!("legacy log");
    log::trace!("below threshold");
    assert!(console.records().is_empty());

    // Application code under the general logger: its own events reach both
    // sinks, legacy records from libraries still reach the file only.
    loggers.general.in_scope(|| {
        tracing::info!("application");
        log::warn!("legacy from library");
    });

    assert_eq!(messages(&console.records()), ["application"]);

    let records = file_records(&path);
    assert_eq!(
        messages(&records),
        ["bare tracing", "legacy log", "application", "legacy from library"]
    );
    assert_eq!(records[1]["level"], "warn");
    assert!(records[1]["caller"]
        .as_str()
        .unwrap()
        .starts_with("tests/redirect.rs:"));
    assert!(records[1].get("log.target").is_none());

    // A second redirect is refused.
    let err = redirect_std_log(&loggers.general).unwrap_err();
    assert!(matches!(err, LoggingError::LogBridge(_)));
}
