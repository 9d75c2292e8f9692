//! Logger handles.

use std::fmt;
use std::sync::Arc;

use tracing::dispatcher::{self, DefaultGuard, Dispatch};
use tracing_subscriber::filter::{Filtered, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

use super::destination::Destination;
use super::encoder::JsonLayer;
use super::error::LoggingError;

/// One destination with its own threshold.
#[derive(Debug, Clone)]
pub struct Sink {
    pub destination: Destination,
    pub level: LevelFilter,
}

/// A write-only handle over one or more sinks.
///
/// Cloning is cheap and every clone logs to the same sinks. Events reach the
/// logger through `tracing` macros run inside [`Logger::in_scope`], under a
/// guard from [`Logger::set_default`], or inside futures wrapped with
/// `WithSubscriber::with_subscriber(logger.dispatch().clone())`.
#[derive(Clone)]
pub struct Logger {
    name: Option<Arc<str>>,
    sinks: Arc<[Sink]>,
    dispatch: Dispatch,
}

impl Logger {
    /// JSON logger writing records at or above `level` to `destination`.
    pub fn json(destination: Destination, level: LevelFilter) -> Self {
        Self::from_sinks(None, vec![Sink { destination, level }])
    }

    /// Combine loggers so every event is offered to all of their sinks, in order.
    ///
    /// The result is unnamed, like a freshly built logger.
    pub fn tee(loggers: &[Logger]) -> Result<Self, LoggingError> {
        if loggers.is_empty() {
            return Err(LoggingError::EmptyTee);
        }

        let sinks = loggers
            .iter()
            .flat_map(|logger| logger.sinks.iter().cloned())
            .collect();
        Ok(Self::from_sinks(None, sinks))
    }

    /// Child logger whose records carry `name`; nested names join with `.`.
    pub fn named(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        let name = match &self.name {
            Some(parent) => format!("{}.{}", parent, name),
            None => name.to_string(),
        };
        Self::from_sinks(Some(Arc::from(name)), self.sinks.to_vec())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    /// Most verbose threshold across all sinks.
    pub fn level(&self) -> LevelFilter {
        self.sinks
            .iter()
            .map(|sink| sink.level)
            .max()
            .unwrap_or(LevelFilter::OFF)
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Run `f` with this logger as the current thread's default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    /// Make this logger the current thread's default until the guard drops.
    pub fn set_default(&self) -> DefaultGuard {
        dispatcher::set_default(&self.dispatch)
    }

    fn from_sinks(name: Option<Arc<str>>, sinks: Vec<Sink>) -> Self {
        let layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = sinks
            .iter()
            .map(|sink| {
                let layer: Filtered<JsonLayer, LevelFilter, Registry> =
                    JsonLayer::new(sink.destination.clone(), name.clone()).with_filter(sink.level);
                layer.boxed()
            })
            .collect();

        let dispatch = Dispatch::new(Registry::default().with(layers));

        Self {
            name,
            sinks: sinks.into(),
            dispatch,
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("sinks", &self.sinks)
            .finish()
    }
}
