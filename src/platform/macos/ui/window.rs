//! The application window.

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nsstring, NSPoint, NSRect, NSSize, NO};
use crate::platform::macos::ffi::{
    WindowId, NS_BACKING_STORE_BUFFERED, NS_WINDOW_STYLE_CLOSABLE, NS_WINDOW_STYLE_MINIATURIZABLE,
    NS_WINDOW_STYLE_RESIZABLE, NS_WINDOW_STYLE_TITLED,
};

/// Default content size of the application window.
const WINDOW_SIZE: (f64, f64) = (480.0, 360.0);

/// Create the titled application window, centered and ordered front.
///
/// Closing it only hides it, so the shell can bring it back.
///
/// # Safety
/// Must be called from the main thread with an autorelease pool in place.
pub unsafe fn create_main_window(title: &str) -> WindowId {
    let frame = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
    );
    let style_mask = NS_WINDOW_STYLE_TITLED
        | NS_WINDOW_STYLE_CLOSABLE
        | NS_WINDOW_STYLE_MINIATURIZABLE
        | NS_WINDOW_STYLE_RESIZABLE;

    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: style_mask,
        backing: NS_BACKING_STORE_BUFFERED,
        defer: NO
    ];
    let _: () = msg_send![window, setReleasedWhenClosed: NO];

    let title = nsstring(title);
    let _: () = msg_send![window, setTitle: &*title];
    let _: () = msg_send![window, center];
    window
}
