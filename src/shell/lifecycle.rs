//! Dock variant of the shell.
//!
//! Keeps the process alive after the last window closes and supplies a
//! dock menu with "Show <app>" and "Quit".

use crate::model::{ContextMenu, MenuAction};
use crate::shell::host::AppHost;

pub struct LifecycleController<H: AppHost> {
    host: H,
    app_name: String,
}

impl<H: AppHost> LifecycleController<H> {
    pub fn new(host: H, app_name: impl Into<String>) -> Self {
        Self {
            host,
            app_name: app_name.into(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The app stays alive when its last window closes.
    pub fn on_last_window_closed(&self) -> bool {
        false
    }

    pub fn on_supports_secure_restorable_state(&self) -> bool {
        true
    }

    /// Build a fresh dock menu. Called on every dock menu request.
    pub fn on_request_dock_menu(&self) -> ContextMenu {
        tracing::trace!("building dock menu");
        ContextMenu::dock(&self.app_name)
    }

    /// Dock icon clicked while the app is running.
    pub fn on_reopen(&mut self, has_visible_windows: bool) -> bool {
        if !has_visible_windows {
            self.show_window();
        }
        true
    }

    pub fn perform(&mut self, action: MenuAction) {
        tracing::debug!(?action, "dock menu action");
        match action {
            MenuAction::ShowWindow => self.show_window(),
            MenuAction::Terminate => self.host.terminate(),
        }
    }

    /// Bring the primary window to the front and activate the app.
    pub fn show_window(&mut self) {
        let Some(window) = self.host.primary_window() else {
            tracing::debug!("no primary window to show");
            return;
        };
        self.host.make_key_and_order_front(&window);
        self.host.activate_ignoring_other_apps();
    }

    pub fn on_will_terminate(&self) {
        tracing::info!(app = %self.app_name, "terminating");
    }
}
