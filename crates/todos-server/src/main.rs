//! Todo list server binary.
//!
//! Wires configuration, logging, and the HTTP API together and serves
//! until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `todos-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Create an empty in-memory store
//! 4. Serve the HTTP API until a shutdown signal arrives

mod error;

use std::path::Path;
use std::sync::Arc;

use todos_core::{AppConfig, LogFormat};
use todos_web::AppState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default configuration file, relative to the working directory.
const CONFIG_PATH: &str = "todos-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging setup, or the server fails.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration. Logging is not up yet, so remember whether
    //    the file was found and report it afterwards.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config)?;

    info!("todos-server starting");
    if !from_file {
        info!(path = CONFIG_PATH, "Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        log_level = config.logging.level,
        log_format = ?config.logging.format,
        "Configuration loaded"
    );

    // 3. Fresh, empty store for the lifetime of the process.
    let state = Arc::new(AppState::new());

    // 4. Serve until Ctrl-C.
    todos_web::start_server(
        &config.server.host,
        config.server.port,
        state,
        shutdown_signal(),
    )
    .await?;

    info!("todos-server exited cleanly");
    Ok(())
}

/// Load configuration from `todos-config.yaml`, falling back to defaults
/// (plus environment overrides) when the file does not exist.
fn load_config() -> Result<(AppConfig, bool), AppError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((AppConfig::from_file(config_path)?, true))
    } else {
        let mut config = AppConfig::default();
        config.apply_env_overrides()?;
        Ok((config, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.level` from the config.
fn init_logging(config: &AppConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match config.logging.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| AppError::Logging {
        message: e.to_string(),
    })
}

/// Resolve when the process receives `Ctrl-C`.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C; shutting down");
        return;
    }
    info!("shutdown signal received");
}
