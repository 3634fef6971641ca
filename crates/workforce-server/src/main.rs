//! Server binary for the workforce analytics service.
//!
//! Wires configuration, logging, the employee roster, and the HTTP API
//! together, then serves until `Ctrl-C` or `SIGTERM`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `workforce-config.yaml` plus environment
//!    overrides (`PORT`, `HOST`, `WORKFORCE_ROSTER`, `LOG_FORMAT`)
//! 2. Initialize structured logging (tracing)
//! 3. Build and validate the roster against today's date
//! 4. Serve the HTTP API

mod error;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use workforce_api::{AppState, ServerConfig, start_server};
use workforce_core::config::{LogFormat, LoggingConfig};
use workforce_core::{Clock, Roster, ServiceConfig, SystemClock};

use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any initialization step or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run().await?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    // 1. Load configuration.
    let config = ServiceConfig::load()?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("workforce-server starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        roster = ?config.roster.path,
        log_level = config.logging.level,
        "Configuration loaded"
    );

    // 3. Build the roster.
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let roster = Roster::load(&config.roster, clock.today())?;

    // 4. Serve.
    let state = Arc::new(AppState::new(roster, clock));
    start_server(&ServerConfig::from(&config.server), state).await?;

    info!("workforce-server exited cleanly");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    match logging.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
