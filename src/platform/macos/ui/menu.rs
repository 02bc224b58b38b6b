//! `NSMenu` construction from [`ContextMenu`] descriptions.
//!
//! Every item targets the shell delegate with the single
//! `menuItemInvoked:` action; the item's tag carries its [`MenuAction`].
//!
//! [`MenuAction`]: crate::model::MenuAction

use crate::model::{ContextMenu, MenuEntry};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nsstring, sel, NO};
use crate::platform::macos::ffi::MenuId;

/// Build a retained `NSMenu` for `menu` with all items targeting `target`.
///
/// # Safety
/// Must be called from the main thread. `target` must implement
/// `menuItemInvoked:` and outlive the menu.
pub unsafe fn build_ns_menu(menu: &ContextMenu, target: id) -> MenuId {
    let ns_menu: id = msg_send![get_class("NSMenu"), alloc];
    let ns_menu: id = msg_send![ns_menu, init];
    // Items are enabled by their action, not by responder chain validation
    let _: () = msg_send![ns_menu, setAutoenablesItems: NO];

    for entry in menu.entries() {
        let ns_item: id = match entry {
            MenuEntry::Separator => msg_send![get_class("NSMenuItem"), separatorItem],
            MenuEntry::Item(item) => {
                let title = nsstring(&item.label);
                let key = nsstring(&item.key_equivalent);
                let ns_item: id = msg_send![get_class("NSMenuItem"), alloc];
                let ns_item: id = msg_send![
                    ns_item,
                    initWithTitle: &*title,
                    action: sel!(menuItemInvoked:),
                    keyEquivalent: &*key
                ];
                let _: () = msg_send![ns_item, setTarget: target];
                let _: () = msg_send![ns_item, setTag: item.action.tag()];
                let _: id = msg_send![ns_item, autorelease];
                ns_item
            }
        };
        let _: () = msg_send![ns_menu, addItem: ns_item];
    }

    ns_menu
}
