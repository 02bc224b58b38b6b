//! Host platform seams.
//!
//! The controllers never touch AppKit directly. Everything they need from
//! the platform goes through these traits, which `platform::macos` backs
//! with real message sends and the tests back with a recorder.

use std::path::{Path, PathBuf};

use crate::model::ContextMenu;

/// Kind of mouse event that triggered the status item action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    LeftMouseUp,
    RightMouseUp,
    /// Any other event type (keyboard activation, accessibility press...).
    Other,
}

/// Application and window operations shared by both shell variants.
pub trait AppHost {
    /// Non-owning handle to the primary window.
    type Window;

    /// The application's first window, if one exists.
    fn primary_window(&self) -> Option<Self::Window>;

    fn center_window(&mut self, window: &Self::Window);

    fn make_key_and_order_front(&mut self, window: &Self::Window);

    /// Bring the application to the foreground, ignoring other apps.
    fn activate_ignoring_other_apps(&mut self);

    /// Ask the platform to terminate the process.
    fn terminate(&mut self);
}

/// Status bar operations used by the status indicator variant.
pub trait StatusBarHost: AppHost {
    /// A decoded image ready to be placed on the status button.
    type Image;

    /// The bundle's private frameworks directory.
    fn private_frameworks_dir(&self) -> Option<PathBuf>;

    /// Decode the image at `path`. `None` if the data is not an image.
    fn load_image(&mut self, path: &Path) -> Option<Self::Image>;

    /// Create the status item with the given length.
    fn create_status_item(&mut self, length: f64);

    fn set_status_item_visible(&mut self, visible: bool);

    /// Resize `image`, set its template flag and put it on the button.
    fn set_status_image(&mut self, image: Self::Image, width: f64, height: f64, template: bool);

    fn set_status_title(&mut self, title: &str);

    /// Route the given mouse-up events to the click handler.
    fn bind_status_clicks(&mut self, kinds: &[ClickKind]);

    /// Keep `menu` as the status item's menu, without attaching it for
    /// automatic display on left click.
    fn install_status_menu(&mut self, menu: &ContextMenu);

    /// Pop up the installed status menu above the status button.
    fn popup_status_menu(&mut self, vertical_offset: f64);

    /// The event currently being dispatched by the platform.
    fn current_event(&self) -> Option<ClickKind>;
}
