//! Shell configuration.
//!
//! Read once at startup from `shell.json` in the bundle's Resources
//! directory (if present), then overridden by environment variables.
//! The shell never writes this file.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, ShellError};
use crate::model::constants::*;

/// Which of the two shell designs runs in this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellVariant {
    /// Dock menu only, no status bar item.
    Dock,
    /// Persistent status bar item with its own menu.
    #[default]
    #[serde(alias = "status_bar", alias = "statusbar")]
    StatusBar,
}

impl FromStr for ShellVariant {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dock" => Ok(ShellVariant::Dock),
            "status-bar" | "status_bar" | "statusbar" => Ok(ShellVariant::StatusBar),
            other => Err(ShellError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for ShellVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellVariant::Dock => f.write_str("dock"),
            ShellVariant::StatusBar => f.write_str("status-bar"),
        }
    }
}

/// Status bar icon settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Path of the icon relative to the private frameworks directory.
    pub relative_path: String,
    /// Edge length in points.
    pub size: f64,
    pub fallback_title: String,
}

impl IconConfig {
    /// Replace values AppKit cannot render with the defaults.
    ///
    /// An empty fallback title would leave the status item invisible, and a
    /// non-positive or non-finite size yields a zero-sized image.
    pub fn sanitized(mut self) -> Self {
        if self.fallback_title.trim().is_empty() {
            tracing::warn!("empty icon fallback title, using default");
            self.fallback_title = FALLBACK_TITLE.to_string();
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            tracing::warn!(size = self.size, "invalid icon size, using default");
            self.size = ICON_SIZE;
        }
        self
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            relative_path: format!("{ICON_FRAMEWORK}/{ICON_ASSET_PATH}"),
            size: ICON_SIZE,
            fallback_title: FALLBACK_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `txtpocket_shell=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub app_name: String,
    pub variant: ShellVariant,
    pub icon: IconConfig,
    pub log: LogConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            variant: ShellVariant::default(),
            icon: IconConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Load the config file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ShellError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ShellError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a config document. Icon values are sanitized afterwards.
    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.icon = config.icon.sanitized();
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// An unparseable variant is ignored and the configured one kept.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_VARIANT) {
            match raw.parse::<ShellVariant>() {
                Ok(variant) => self.variant = variant,
                Err(e) => tracing::warn!(
                    error = %e,
                    var = ENV_VARIANT,
                    "ignoring invalid shell variant override"
                ),
            }
        }
        if let Some(name) = lookup(ENV_APP_NAME) {
            let name = name.trim();
            if !name.is_empty() {
                self.app_name = name.to_string();
            }
        }
        self
    }
}
