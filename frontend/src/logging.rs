//! Logging setup
//!
//! Installs a `tracing` subscriber writing to the configured log file, or to
//! stderr when none is set. `RUST_LOG` overrides the configured level.

use crate::config::AppConfig;
use crate::error::{PlayerError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.log_level)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    PlayerError::Logging(format!(
                        "cannot open log file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| PlayerError::Logging(e.to_string()))
}

fn default_directive(level: Level) -> String {
    level.to_string().to_lowercase()
}
