//! JSON record encoder.
//!
//! Each event becomes a single line:
//!
//! ```text
//! {"level":"info","ts":"2024-05-01T12:00:00.000+0000","logger":"api","caller":"http/server.rs:42","msg":"Listening","port":8080}
//! ```
//!
//! `logger` appears only for named loggers, `stacktrace` only for error and
//! fatal records.

use std::backtrace::Backtrace;
use std::fmt;
use std::io;
use std::sync::Arc;

use serde::ser::{SerializeMap, Serializer};
use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::destination::Destination;
use super::FATAL_TARGET;

const LEVEL: &str = "level";
const TIME: &str = "ts";
const NAME: &str = "logger";
const CALLER: &str = "caller";
const MESSAGE: &str = "msg";
const STACKTRACE: &str = "stacktrace";

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Layer that writes every event it sees to one [`Destination`].
///
/// Filtering is left to the caller (`Layer::with_filter`), so the same encoder
/// serves sinks with different thresholds.
#[derive(Debug, Clone)]
pub struct JsonLayer {
    destination: Destination,
    name: Option<Arc<str>>,
}

impl JsonLayer {
    pub fn new(destination: Destination, name: Option<Arc<str>>) -> Self {
        Self { destination, name }
    }

    /// Serialize an event into a newline-terminated JSON record.
    pub fn encode(&self, event: &Event<'_>) -> io::Result<Vec<u8>> {
        // Events bridged from the `log` crate carry their real call site in
        // `log.*` fields.
        let normalized = event.normalized_metadata();
        let metadata = normalized.as_ref().unwrap_or_else(|| event.metadata());

        let mut fields = FieldStorage::default();
        event.record(&mut fields);

        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::new(&mut buffer);
        let mut map = serializer.serialize_map(None)?;

        map.serialize_entry(LEVEL, level_name(metadata))?;
        map.serialize_entry(TIME, &chrono::Local::now().format(TIME_FORMAT).to_string())?;
        if let Some(name) = &self.name {
            map.serialize_entry(NAME, name.as_ref())?;
        }
        if let Some(caller) = short_caller(metadata) {
            map.serialize_entry(CALLER, &caller)?;
        }
        map.serialize_entry(MESSAGE, &fields.message)?;
        for (key, value) in &fields.values {
            map.serialize_entry(key, value)?;
        }
        if *metadata.level() == Level::ERROR {
            map.serialize_entry(STACKTRACE, &Backtrace::force_capture().to_string())?;
        }
        map.end()?;

        buffer.push(b'\n');
        Ok(buffer)
    }
}

impl<S> Layer<S> for JsonLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if let Ok(record) = self.encode(event) {
            // A failing sink must not stop the remaining layers of a tee.
            let _ = self.destination.write_record(&record);
        }
    }
}

fn level_name(metadata: &Metadata<'_>) -> &'static str {
    match *metadata.level() {
        Level::ERROR if metadata.target() == FATAL_TARGET => "fatal",
        Level::ERROR => "error",
        Level::WARN => "warn",
        Level::INFO => "info",
        Level::DEBUG => "debug",
        _ => "trace",
    }
}

/// `parent/file.rs:line`, the last two path components of the call site.
fn short_caller(metadata: &Metadata<'_>) -> Option<String> {
    let file = metadata.file()?;
    let is_separator = |c: char| c == '/' || c == '\\';

    let short = match file.rfind(is_separator) {
        Some(last) => match file[..last].rfind(is_separator) {
            Some(parent) => &file[parent + 1..],
            None => file,
        },
        None => file,
    };

    Some(format!("{}:{}", short, metadata.line().unwrap_or(0)))
}

/// Collects the message and structured fields of one event.
#[derive(Default)]
struct FieldStorage {
    message: String,
    values: Vec<(&'static str, Value)>,
}

impl FieldStorage {
    fn insert(&mut self, field: &Field, value: Value) {
        match field.name() {
            "message" => {
                self.message = match value {
                    Value::String(message) => message,
                    other => other.to_string(),
                }
            }
            name if name.starts_with("log.") => {}
            name => self.values.push((name, value)),
        }
    }
}

impl Visit for FieldStorage {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, Value::from(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, Value::from(format!("{:?}", value)));
    }
}
