#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Native shell for the TxtPocket desktop app on macOS.
//!
//! The shell keeps the app alive with no windows open, offers a dock menu
//! or a menu bar status item, and brings the single application window
//! back on demand.
//!
//! Everything outside `platform` is free of macOS FFI so tests can run as
//! normal integration tests on any OS.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod platform;
pub mod shell;

// Re-export the types most callers need
pub use config::{ShellConfig, ShellVariant};
pub use error::{Result, ShellError};
pub use model::{ContextMenu, MenuAction, MenuEntry};
pub use shell::{AppHost, ClickKind, Shell, StatusBarHost};
