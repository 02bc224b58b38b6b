//! AppKit implementation of the shell host traits.

use std::path::{Path, PathBuf};

use objc2_app_kit::NSEvent;

use crate::model::ContextMenu;
use crate::platform::macos::app::deferred::{defer, Deferred};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, string_from_ns, NSApp, YES,
};
use crate::platform::macos::ffi::{
    ImageId, MenuId, StatusItemId, WindowId, NS_EVENT_MASK_LEFT_MOUSE_UP,
    NS_EVENT_MASK_RIGHT_MOUSE_UP, NS_EVENT_TYPE_LEFT_MOUSE_UP, NS_EVENT_TYPE_RIGHT_MOUSE_UP,
};
use crate::platform::macos::ui::{menu, status_item};
use crate::shell::{AppHost, ClickKind, StatusBarHost};

/// Host backed by the running `NSApplication`.
///
/// Holds the delegate (target of every menu item and of the status
/// button) and the status item and menu once they exist.
pub struct AppKitHost {
    delegate: id,
    status_item: StatusItemId,
    status_menu: MenuId,
}

impl AppKitHost {
    /// # Safety
    /// `delegate` must be the registered shell delegate and live for the
    /// rest of the process.
    pub unsafe fn new(delegate: id) -> Self {
        Self {
            delegate,
            status_item: nil,
            status_menu: nil,
        }
    }
}

impl AppHost for AppKitHost {
    type Window = WindowId;

    fn primary_window(&self) -> Option<WindowId> {
        unsafe {
            let windows: id = msg_send![NSApp(), windows];
            let first: id = msg_send![windows, firstObject];
            (first != nil).then_some(first)
        }
    }

    fn center_window(&mut self, window: &WindowId) {
        unsafe {
            let _: () = msg_send![*window, center];
        }
    }

    fn make_key_and_order_front(&mut self, window: &WindowId) {
        unsafe {
            let _: () = msg_send![*window, makeKeyAndOrderFront: nil];
        }
    }

    fn activate_ignoring_other_apps(&mut self) {
        unsafe {
            let _: () = msg_send![NSApp(), activateIgnoringOtherApps: YES];
        }
    }

    fn terminate(&mut self) {
        defer(Deferred::Terminate);
    }
}

impl StatusBarHost for AppKitHost {
    type Image = ImageId;

    fn private_frameworks_dir(&self) -> Option<PathBuf> {
        unsafe {
            let bundle: id = msg_send![get_class("NSBundle"), mainBundle];
            let path: id = msg_send![bundle, privateFrameworksPath];
            string_from_ns(path).map(PathBuf::from)
        }
    }

    fn load_image(&mut self, path: &Path) -> Option<ImageId> {
        let path = path.to_str()?;
        let image = unsafe { status_item::load_image(path) };
        (image != nil).then_some(image)
    }

    fn create_status_item(&mut self, length: f64) {
        self.status_item = unsafe { status_item::create_status_item(length) };
    }

    fn set_status_item_visible(&mut self, visible: bool) {
        unsafe { status_item::set_visible(self.status_item, visible) }
    }

    fn set_status_image(&mut self, image: ImageId, width: f64, height: f64, template: bool) {
        unsafe { status_item::set_button_image(self.status_item, image, width, height, template) }
    }

    fn set_status_title(&mut self, title: &str) {
        unsafe { status_item::set_button_title(self.status_item, title) }
    }

    fn bind_status_clicks(&mut self, kinds: &[ClickKind]) {
        let mask = kinds.iter().fold(0u64, |mask, kind| match kind {
            ClickKind::LeftMouseUp => mask | NS_EVENT_MASK_LEFT_MOUSE_UP,
            ClickKind::RightMouseUp => mask | NS_EVENT_MASK_RIGHT_MOUSE_UP,
            ClickKind::Other => mask,
        });
        unsafe { status_item::bind_click_action(self.status_item, self.delegate, mask) }
    }

    fn install_status_menu(&mut self, menu: &ContextMenu) {
        self.status_menu = unsafe { menu::build_ns_menu(menu, self.delegate) };
    }

    fn popup_status_menu(&mut self, vertical_offset: f64) {
        let button = unsafe { status_item::status_button(self.status_item) };
        defer(Deferred::PopupMenu {
            menu: self.status_menu,
            button,
            offset: vertical_offset,
        });
    }

    fn current_event(&self) -> Option<ClickKind> {
        unsafe {
            let event: id = msg_send![NSApp(), currentEvent];
            if event == nil {
                return None;
            }
            // `type` is a Rust keyword, so go through the typed binding
            let event = &*(event as *const NSEvent);
            Some(match event.r#type().0 as u64 {
                NS_EVENT_TYPE_LEFT_MOUSE_UP => ClickKind::LeftMouseUp,
                NS_EVENT_TYPE_RIGHT_MOUSE_UP => ClickKind::RightMouseUp,
                _ => ClickKind::Other,
            })
        }
    }
}
