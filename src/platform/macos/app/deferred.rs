//! Platform calls that must run after the shell borrow is released.
//!
//! `terminate:` and `popUpMenuPositioningItem:` both spin AppKit
//! synchronously and call back into the delegate (`applicationWillTerminate:`,
//! `menuItemInvoked:`). The host queues them here and the delegate runs the
//! queue once it no longer holds the shell.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSApp, NSPoint, NSRect};
use crate::platform::macos::ffi::{ButtonId, MenuId};

#[derive(Debug)]
pub enum Deferred {
    /// Pop up `menu` above `button`, `offset` points over its top edge.
    PopupMenu {
        menu: MenuId,
        button: ButtonId,
        offset: f64,
    },
    Terminate,
}

// Main thread only, like every other AppKit call in the shell.
thread_local! {
    static QUEUE: RefCell<VecDeque<Deferred>> = const { RefCell::new(VecDeque::new()) };
}

pub fn defer(op: Deferred) {
    QUEUE.with(|q| q.borrow_mut().push_back(op));
}

fn take_next() -> Option<Deferred> {
    QUEUE.with(|q| q.borrow_mut().pop_front())
}

/// Run every queued call in order.
///
/// # Safety
/// Must be called from the main thread, outside any shell borrow.
pub unsafe fn flush_deferred() {
    while let Some(op) = take_next() {
        tracing::trace!(?op, "running deferred platform call");
        match op {
            Deferred::PopupMenu {
                menu,
                button,
                offset,
            } => {
                if menu == nil || button == nil {
                    continue;
                }
                let bounds: NSRect = msg_send![button, bounds];
                let location = NSPoint::new(0.0, bounds.size.height + offset);
                let _: bool = msg_send![
                    menu,
                    popUpMenuPositioningItem: nil,
                    atLocation: location,
                    inView: button
                ];
            }
            Deferred::Terminate => {
                let app: id = NSApp();
                let _: () = msg_send![app, terminate: nil];
            }
        }
    }
}
