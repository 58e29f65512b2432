//! World Cup History dashboard server
//!
//! Run with: cargo run --bin worldcup
//!
//! # Configuration
//!
//! Read from `config.toml` (see `worldcup-cli config`), overridden by:
//! - `WORLDCUP_HOST`: Host to bind to (default: 127.0.0.1)
//! - `WORLDCUP_PORT`: Port to listen on (default: 8053)
//! - `WORLDCUP_UI_DIR`: Built dashboard assets (default: worldcup-ui/dist)
//! - `WORLDCUP_LOG_LEVEL`: Log level (default: info)
//! - `WORLDCUP_LOG_FORMAT`: `pretty` or `json`
//! - `RUST_LOG`: Full filter directive, wins over the level

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worldcup_history::api::{serve, AppState};
use worldcup_history::config::{Config, LoggingConfig};
use worldcup_history::data::Dataset;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_file = Config::find_config_file();
    let config = Config::load_from(config_file.as_deref())?;
    init_tracing(&config.logging);

    match &config_file {
        Some(path) => tracing::info!(path = %path.display(), "Loaded config"),
        None => tracing::info!("Using default config with environment overrides"),
    }

    tracing::info!(
        "Starting World Cup History dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    let dataset = Arc::new(Dataset::builtin()?);
    tracing::info!(
        matches = dataset.matches().len(),
        standings = dataset.standings().len(),
        "Dataset loaded"
    );

    let state = AppState::new(dataset, config.server.clone());

    tracing::info!("Starting server on {}", config.server.addr());
    serve(state, &config.server).await?;

    tracing::info!("World Cup History dashboard stopped");
    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` takes precedence
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
