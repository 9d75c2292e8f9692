//! Server process entry point.
//!
//! # Startup
//!
//! ```text
//!   CLI args ──▶ config file (optional) ──▶ overrides ──▶ ServerConfig
//!                                                            │
//!                                                            ▼
//!                                   ┌─────────────────────────────────────┐
//!                                   │        observability::logging        │
//!                                   │                                      │
//!                                   │  console ──┐                         │
//!                                   │            ├──▶ tee ──▶ general      │
//!                                   │  file ─────┘                         │
//!                                   │                                      │
//!                                   │  active ──▶ tracing global + log     │
//!                                   └─────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;

use server_logger::config::{load_config, ServerConfig};
use server_logger::lifecycle::{self, Shutdown};
use server_logger::LoggingError;

#[derive(Parser)]
#[command(name = "server-logger")]
#[command(about = "Server process with structured JSON logging", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Service name used as the application logger name
    #[arg(long)]
    name: Option<String>,

    /// Log level (debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path; empty disables file logging
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,

    /// Mirror redirected global logging to stdout when a log file is set
    #[arg(long)]
    log_stdout: bool,
}

impl Cli {
    fn apply(&self, config: &mut ServerConfig) {
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(level) = &self.log_level {
            config.logger.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logger.file = file.clone();
        }
        if self.log_stdout {
            config.logger.stdout = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    cli.apply(&mut config);

    let loggers = match lifecycle::start(&config) {
        Ok(loggers) => loggers,
        // The fatal record is already on the console.
        Err(LoggingError::OpenLogFile { .. }) => process::exit(1),
        Err(err) => {
            eprintln!("Failed to set up logging: {}", err);
            process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let mut stopped = shutdown.subscribe();
    let signals = {
        let logger = loggers.general.clone();
        let shutdown = shutdown.clone();
        tokio::spawn(async move { lifecycle::wait_for_shutdown(&logger, &shutdown).await })
    };
    // The signal task holds the only sender left; if it fails, `recv` ends.
    drop(shutdown);

    let reason = stopped.recv().await.unwrap_or("channel closed");
    signals.await??;

    loggers
        .general
        .in_scope(|| tracing::info!(reason, "Shutdown complete"));
    Ok(())
}
