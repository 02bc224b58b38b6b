//! Logging setup.
//!
//! `RUST_LOG` wins over the configured level, so a single launch can be
//! made verbose without touching `shell.json`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LogConfig, LogFormat};
use crate::error::{Result, ShellError};
use crate::model::constants::DEFAULT_LOG_LEVEL;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = create_env_filter(env.as_deref(), &config.level);

    let output = match config.format {
        LogFormat::Text => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(cfg!(debug_assertions))
            .with_ansi(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))?;

    tracing::debug!(level = %config.level, format = ?config.format, "logging initialised");
    Ok(())
}

/// `env` (the `RUST_LOG` value) if set and valid, otherwise the configured
/// directive, otherwise `info`.
fn create_env_filter(env: Option<&str>, level: &str) -> EnvFilter {
    env.and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
