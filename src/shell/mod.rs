//! Shell controllers (pure Rust, no FFI).
//!
//! Two alternative designs of the same shell live here:
//!
//! - [`LifecycleController`]: dock menu only
//! - [`StatusIndicatorController`]: status bar item with its own menu
//!
//! Exactly one of them runs per process, wrapped in [`Shell`]. The AppKit
//! delegate owns the `Shell` and forwards every callback to it.
//!
//! ```text
//! AppKit callback ──► ShellDelegate ──► Shell ──► controller ──► AppHost / StatusBarHost
//! ```

pub mod host;
pub mod lifecycle;
pub mod status_indicator;

pub use host::{AppHost, ClickKind, StatusBarHost};
pub use lifecycle::LifecycleController;
pub use status_indicator::{ClickOutcome, StatusIndicator, StatusIndicatorController};

use crate::config::{ShellConfig, ShellVariant};
use crate::error::Result;
use crate::model::{ContextMenu, MenuAction};

/// The active shell variant.
pub enum Shell<H: StatusBarHost> {
    Dock(LifecycleController<H>),
    StatusBar(StatusIndicatorController<H>),
}

impl<H: StatusBarHost> Shell<H> {
    /// Build the variant selected by `config`.
    pub fn new(host: H, config: &ShellConfig) -> Self {
        tracing::info!(variant = %config.variant, app = %config.app_name, "starting shell");
        match config.variant {
            ShellVariant::Dock => Shell::Dock(LifecycleController::new(host, &config.app_name)),
            ShellVariant::StatusBar => {
                Shell::StatusBar(StatusIndicatorController::new(host, config))
            }
        }
    }

    pub fn variant(&self) -> ShellVariant {
        match self {
            Shell::Dock(_) => ShellVariant::Dock,
            Shell::StatusBar(_) => ShellVariant::StatusBar,
        }
    }

    pub fn host(&self) -> &H {
        match self {
            Shell::Dock(c) => c.host(),
            Shell::StatusBar(c) => c.host(),
        }
    }

    pub fn host_mut(&mut self) -> &mut H {
        match self {
            Shell::Dock(c) => c.host_mut(),
            Shell::StatusBar(c) => c.host_mut(),
        }
    }

    pub fn on_will_finish_launching(&mut self) {
        if let Shell::StatusBar(c) = self {
            c.on_will_finish_launching();
        }
    }

    pub fn on_did_finish_launching(&mut self) {
        if let Shell::StatusBar(c) = self {
            c.on_did_finish_launching();
        }
    }

    pub fn on_last_window_closed(&self) -> bool {
        match self {
            Shell::Dock(c) => c.on_last_window_closed(),
            Shell::StatusBar(c) => c.on_last_window_closed(),
        }
    }

    pub fn on_supports_secure_restorable_state(&self) -> bool {
        match self {
            Shell::Dock(c) => c.on_supports_secure_restorable_state(),
            Shell::StatusBar(c) => c.on_supports_secure_restorable_state(),
        }
    }

    /// Dock menu for the dock variant; the status bar variant has none.
    pub fn on_request_dock_menu(&self) -> Option<ContextMenu> {
        match self {
            Shell::Dock(c) => Some(c.on_request_dock_menu()),
            Shell::StatusBar(_) => None,
        }
    }

    pub fn on_reopen(&mut self, has_visible_windows: bool) -> bool {
        match self {
            Shell::Dock(c) => c.on_reopen(has_visible_windows),
            Shell::StatusBar(c) => c.on_reopen(has_visible_windows),
        }
    }

    /// Status item click. The dock variant has no status item, so this
    /// yields `Ok(None)` there.
    pub fn on_indicator_clicked(&mut self) -> Result<Option<ClickOutcome>> {
        match self {
            Shell::Dock(_) => Ok(None),
            Shell::StatusBar(c) => c.on_indicator_clicked().map(Some),
        }
    }

    pub fn perform(&mut self, action: MenuAction) {
        match self {
            Shell::Dock(c) => c.perform(action),
            Shell::StatusBar(c) => c.perform(action),
        }
    }

    pub fn on_will_terminate(&self) {
        match self {
            Shell::Dock(c) => c.on_will_terminate(),
            Shell::StatusBar(c) => c.on_will_terminate(),
        }
    }
}
