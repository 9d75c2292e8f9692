//! The server binary exits when the configured log file cannot be opened.

use std::process::Command;

mod common;

use common::parse_records;

#[test]
fn test_unopenable_log_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("server.log");

    let output = Command::new(env!("CARGO_BIN_EXE_server-logger"))
        .arg("--log-file")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());

    let records = parse_records(&String::from_utf8(output.stdout).unwrap());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["level"], "fatal");
    assert_eq!(records[0]["msg"], "Could not create log file");
    assert!(records[0]["stacktrace"].is_string());
}

#[test]
fn test_config_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("missing").join("from-config.log");
    let config_path = dir.path().join("server.toml");
    std::fs::write(
        &config_path,
        format!("[logger]\nlevel = \"error\"\nfile = {:?}\n", log_path.to_str().unwrap()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_server-logger"))
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let records = parse_records(&String::from_utf8(output.stdout).unwrap());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["level"], "fatal");
}
