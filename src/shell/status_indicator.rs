//! Status bar variant of the shell.
//!
//! Owns the single status item: its icon (or text fallback), its quit menu
//! and the click dispatch between "pop up menu" and "show window".
//!
//! Setup is guarded by a one-shot flag. AppKit normally delivers
//! will-finish-launching before did-finish-launching, but either hook may
//! be the first to arrive and setup still runs exactly once.

use std::path::PathBuf;

use crate::config::{IconConfig, ShellConfig};
use crate::error::{Result, ShellError};
use crate::model::constants::{MENU_VERTICAL_OFFSET, VARIABLE_STATUS_ITEM_LENGTH};
use crate::model::{resolve_icon_path, ContextMenu, IconAppearance, MenuAction};
use crate::shell::host::{ClickKind, StatusBarHost};

/// State of the status item once it has been created.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusIndicator {
    pub visible: bool,
    pub appearance: IconAppearance,
    pub menu: ContextMenu,
}

/// What a status item click ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    PresentedMenu,
    ShowedWindow,
}

pub struct StatusIndicatorController<H: StatusBarHost> {
    host: H,
    app_name: String,
    icon: IconConfig,
    indicator: Option<StatusIndicator>,
}

impl<H: StatusBarHost> StatusIndicatorController<H> {
    pub fn new(host: H, config: &ShellConfig) -> Self {
        Self {
            host,
            app_name: config.app_name.clone(),
            icon: config.icon.clone(),
            indicator: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn indicator(&self) -> Option<&StatusIndicator> {
        self.indicator.as_ref()
    }

    pub fn is_set_up(&self) -> bool {
        self.indicator.is_some()
    }

    pub fn on_will_finish_launching(&mut self) {
        self.setup_indicator();
    }

    pub fn on_did_finish_launching(&mut self) {
        if !self.is_set_up() {
            tracing::debug!("status item not created at will-finish-launching, creating now");
        }
        self.setup_indicator();
    }

    /// Create the status item, its icon and its menu.
    ///
    /// Does nothing once the status item exists.
    pub fn setup_indicator(&mut self) {
        if self.is_set_up() {
            return;
        }
        self.host.create_status_item(VARIABLE_STATUS_ITEM_LENGTH);
        self.host.set_status_item_visible(true);

        let appearance = match self.load_icon() {
            Ok(image) => {
                self.host
                    .set_status_image(image, self.icon.size, self.icon.size, true);
                IconAppearance::template_image(&self.icon)
            }
            Err(e) => {
                tracing::warn!(error = %e, "using text title for status item");
                self.host.set_status_title(&self.icon.fallback_title);
                IconAppearance::fallback(&self.icon)
            }
        };

        self.host
            .bind_status_clicks(&[ClickKind::LeftMouseUp, ClickKind::RightMouseUp]);

        let menu = ContextMenu::status_bar(&self.app_name);
        self.host.install_status_menu(&menu);

        tracing::info!(image = appearance.is_image(), "status item installed");
        self.indicator = Some(StatusIndicator {
            visible: true,
            appearance,
            menu,
        });
    }

    fn load_icon(&mut self) -> Result<H::Image> {
        let Some(frameworks) = self.host.private_frameworks_dir() else {
            return Err(ShellError::IconMissing {
                path: PathBuf::from(&self.icon.relative_path),
            });
        };
        let path = resolve_icon_path(&frameworks, &self.icon);
        if !path.is_file() {
            return Err(ShellError::IconMissing { path });
        }
        match self.host.load_image(&path) {
            Some(image) => {
                tracing::debug!(path = %path.display(), "loaded status item icon");
                Ok(image)
            }
            None => Err(ShellError::IconDecode { path }),
        }
    }

    /// Handle a click on the status item.
    ///
    /// Right mouse up pops up the menu; anything else shows the window.
    /// Returns [`ShellError::MissingCurrentEvent`] if the platform reports no
    /// current event, in which case nothing is mutated.
    pub fn on_indicator_clicked(&mut self) -> Result<ClickOutcome> {
        let kind = self
            .host
            .current_event()
            .ok_or(ShellError::MissingCurrentEvent)?;
        self.setup_indicator();

        tracing::debug!(?kind, "status item clicked");
        if kind == ClickKind::RightMouseUp {
            self.host.popup_status_menu(MENU_VERTICAL_OFFSET);
            Ok(ClickOutcome::PresentedMenu)
        } else {
            self.show_window();
            Ok(ClickOutcome::ShowedWindow)
        }
    }

    /// Center the primary window, bring it to the front, activate the app.
    pub fn show_window(&mut self) {
        let Some(window) = self.host.primary_window() else {
            tracing::debug!("no primary window to show");
            return;
        };
        self.host.center_window(&window);
        self.host.make_key_and_order_front(&window);
        self.host.activate_ignoring_other_apps();
    }

    pub fn on_last_window_closed(&self) -> bool {
        false
    }

    pub fn on_supports_secure_restorable_state(&self) -> bool {
        true
    }

    pub fn on_reopen(&mut self, has_visible_windows: bool) -> bool {
        if !has_visible_windows {
            self.show_window();
        }
        true
    }

    pub fn perform(&mut self, action: MenuAction) {
        self.setup_indicator();
        tracing::debug!(?action, "status menu action");
        match action {
            MenuAction::ShowWindow => self.show_window(),
            MenuAction::Terminate => self.quit(),
        }
    }

    /// Terminate immediately, no confirmation.
    pub fn quit(&mut self) {
        tracing::info!("quit requested from status menu");
        self.host.terminate();
    }

    pub fn on_will_terminate(&self) {
        tracing::info!(app = %self.app_name, "terminating");
    }
}
