//! Shutdown coordination for the server process.

use std::io;

use tokio::sync::broadcast;
use tracing::instrument::WithSubscriber;

use super::signals::shutdown_signal;
use crate::observability::Logger;

/// Broadcasts the shutdown event to every subscribed task.
///
/// Clones share one channel, so the signal task can own a handle while `main`
/// keeps another for subscribing.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<&'static str>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver that yields the name of the event that triggered shutdown.
    pub fn subscribe(&self) -> broadcast::Receiver<&'static str> {
        self.tx.subscribe()
    }

    /// Notify all subscribers. Without subscribers this is a no-op.
    pub fn trigger(&self, reason: &'static str) {
        let _ = self.tx.send(reason);
    }

    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for SIGINT/SIGTERM, log it through `logger`, then trigger `shutdown`.
pub async fn wait_for_shutdown(logger: &Logger, shutdown: &Shutdown) -> io::Result<()> {
    async {
        tracing::info!("Waiting for shutdown signal");
        let signal = shutdown_signal().await?;
        tracing::info!(
            signal,
            subscribers = shutdown.receiver_count(),
            "Shutdown signal received"
        );
        shutdown.trigger(signal);
        Ok::<(), io::Error>(())
    }
    .with_subscriber(logger.dispatch().clone())
    .await
}
