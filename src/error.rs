//! Shell error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    /// The icon file does not exist at the resolved path.
    #[error("status bar icon not found: {}", path.display())]
    IconMissing { path: PathBuf },

    /// The icon file exists but could not be decoded as an image.
    #[error("status bar icon could not be decoded: {}", path.display())]
    IconDecode { path: PathBuf },

    /// A click callback fired without an originating event.
    #[error("status item clicked without a current event")]
    MissingCurrentEvent,

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown shell variant: {0}")]
    UnknownVariant(String),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;
