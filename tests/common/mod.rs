//! Shared utilities for logging integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use server_logger::observability::Destination;

/// In-memory writer whose contents stay readable after being handed to a sink.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn destination(&self) -> Destination {
        Destination::from_writer("buffer", self.clone())
    }

    pub fn records(&self) -> Vec<Value> {
        let bytes = self.0.lock().unwrap().clone();
        parse_records(&String::from_utf8(bytes).unwrap())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Parse newline-delimited JSON records.
pub fn parse_records(content: &str) -> Vec<Value> {
    content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Records currently in the file at `path` (none if it does not exist).
pub fn file_records(path: &Path) -> Vec<Value> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_records(&content),
        Err(_) => Vec::new(),
    }
}

/// Messages of `records`, in order.
pub fn messages(records: &[Value]) -> Vec<String> {
    records
        .iter()
        .map(|record| record["msg"].as_str().unwrap().to_string())
        .collect()
}
