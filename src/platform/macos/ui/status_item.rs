//! Status bar (menu bar) item.
//!
//! Creates the item, sets its icon or title, and routes left and right
//! mouse-up events to the delegate's `statusItemClicked:` action. The menu
//! is not attached to the item, otherwise AppKit would open it on every
//! left click; the delegate pops it up on right click instead.

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, sel, CGFloat, NSSize, NO, YES,
};
use crate::platform::macos::ffi::{ButtonId, ImageId, StatusItemId};

/// Create a status item of `length` in the system status bar.
///
/// # Safety
/// Must be called from main thread, after the app is initialized.
pub unsafe fn create_status_item(length: CGFloat) -> StatusItemId {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];
    let status_item: id = msg_send![status_bar, statusItemWithLength: length];
    // Keep a strong reference so it doesn't get deallocated
    let _: id = msg_send![status_item, retain];
    status_item
}

/// The item's button, or `nil`.
///
/// # Safety
/// `status_item` must be `nil` or a valid NSStatusItem.
pub unsafe fn status_button(status_item: StatusItemId) -> ButtonId {
    if status_item == nil {
        return nil;
    }
    msg_send![status_item, button]
}

/// # Safety
/// `status_item` must be `nil` or a valid NSStatusItem.
pub unsafe fn set_visible(status_item: StatusItemId, visible: bool) {
    if status_item != nil {
        let _: () = msg_send![status_item, setVisible: if visible { YES } else { NO }];
    }
}

/// Load an image from disk. `nil` if the file cannot be decoded.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn load_image(path: &str) -> ImageId {
    let ns_path = nsstring(path);
    let image: id = msg_send![get_class("NSImage"), alloc];
    msg_send![image, initWithContentsOfFile: &*ns_path]
}

/// Size `image`, mark it template if asked, and put it on the button.
///
/// # Safety
/// `status_item` must be a valid NSStatusItem and `image` a valid NSImage.
pub unsafe fn set_button_image(
    status_item: StatusItemId,
    image: ImageId,
    width: CGFloat,
    height: CGFloat,
    template: bool,
) {
    let button = status_button(status_item);
    if button == nil || image == nil {
        return;
    }
    let _: () = msg_send![image, setSize: NSSize::new(width, height)];
    let _: () = msg_send![image, setTemplate: if template { YES } else { NO }];
    let _: () = msg_send![button, setImage: image];
}

/// # Safety
/// `status_item` must be a valid NSStatusItem.
pub unsafe fn set_button_title(status_item: StatusItemId, title: &str) {
    let button = status_button(status_item);
    if button != nil {
        let title = nsstring(title);
        let _: () = msg_send![button, setTitle: &*title];
    }
}

/// Send `statusItemClicked:` to `target` for the events in `mask`.
///
/// # Safety
/// `status_item` must be a valid NSStatusItem; `target` must implement
/// `statusItemClicked:` and outlive the item.
pub unsafe fn bind_click_action(status_item: StatusItemId, target: id, mask: u64) {
    let button = status_button(status_item);
    if button == nil {
        return;
    }
    let _: () = msg_send![button, setTarget: target];
    let _: () = msg_send![button, setAction: sel!(statusItemClicked:)];
    let _: i64 = msg_send![button, sendActionOn: mask];
}
