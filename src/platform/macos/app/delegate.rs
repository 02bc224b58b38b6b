//! `NSApplicationDelegate` subclass that forwards to the [`Shell`].
//!
//! The class is registered at runtime with [`ClassBuilder`]. It carries a
//! single ivar, `_shell`, pointing at the boxed `RefCell<Shell>` created in
//! [`install_delegate`]. Every callback borrows the shell for the duration
//! of the call, then runs the deferred platform queue.

use std::cell::RefCell;
use std::ffi::c_void;

use crate::config::ShellConfig;
use crate::model::MenuAction;
use crate::platform::macos::app::deferred::flush_deferred;
use crate::platform::macos::ffi::bridge::{
    id, msg_send, nil, sel, AnyClass, AnyObject, Bool, ClassBuilder, ObjectExt, Sel, NSApp, NO,
    YES,
};
use crate::platform::macos::host::AppKitHost;
use crate::platform::macos::ui::build_ns_menu;
use crate::shell::Shell;

type ShellCell = RefCell<Shell<AppKitHost>>;

const SHELL_IVAR: &str = "_shell";

/// Register the delegate class (once) and return it.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn delegate_class() -> &'static AnyClass {
    let class_name = c"TxtPocketShellDelegate";
    if let Some(cls) = AnyClass::get(class_name) {
        return cls;
    }

    let superclass = AnyClass::get(c"NSObject").expect("NSObject is always registered");
    let mut builder =
        ClassBuilder::new(class_name, superclass).expect("delegate class name is unique");

    builder.add_ivar::<*mut c_void>(c"_shell");

    // Launch
    builder.add_method(
        sel!(applicationWillFinishLaunching:),
        will_finish_launching as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(applicationDidFinishLaunching:),
        did_finish_launching as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Policy queries
    builder.add_method(
        sel!(applicationShouldTerminateAfterLastWindowClosed:),
        should_terminate_after_last_window_closed as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );
    builder.add_method(
        sel!(applicationSupportsSecureRestorableState:),
        supports_secure_restorable_state as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );

    // Dock
    builder.add_method(
        sel!(applicationDockMenu:),
        dock_menu as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );
    builder.add_method(
        sel!(applicationShouldHandleReopen:hasVisibleWindows:),
        should_handle_reopen as unsafe extern "C-unwind" fn(_, _, _, _) -> _,
    );

    // Termination
    builder.add_method(
        sel!(applicationWillTerminate:),
        will_terminate as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Actions
    builder.add_method(
        sel!(statusItemClicked:),
        status_item_clicked as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuItemInvoked:),
        menu_item_invoked as unsafe extern "C-unwind" fn(_, _, _),
    );

    builder.register()
}

/// Create the delegate, hand it a freshly built [`Shell`], and install it
/// as the application delegate.
///
/// The shell lives for the rest of the process.
///
/// # Safety
/// Must be called from the main thread, before `[NSApp run]`.
pub unsafe fn install_delegate(config: &ShellConfig) -> id {
    let cls = delegate_class();
    let delegate: id = msg_send![cls, alloc];
    let delegate: id = msg_send![delegate, init];
    (*delegate).store_ivar::<*mut c_void>(SHELL_IVAR, std::ptr::null_mut());

    let host = AppKitHost::new(delegate);
    let shell: Box<ShellCell> = Box::new(RefCell::new(Shell::new(host, config)));
    (*delegate).store_ivar::<*mut c_void>(SHELL_IVAR, Box::into_raw(shell) as *mut c_void);

    // NSApplication holds its delegate weakly; the extra retain from
    // alloc/init is never released.
    let _: () = msg_send![NSApp(), setDelegate: delegate];
    delegate
}

/// Borrow the shell for one callback, then run deferred platform calls.
///
/// Returns `None` if the shell is missing or already borrowed higher up
/// the stack.
unsafe fn with_shell<R>(this: &AnyObject, f: impl FnOnce(&mut Shell<AppKitHost>) -> R) -> Option<R> {
    let ptr = *this.load_ivar::<*mut c_void>(SHELL_IVAR) as *const ShellCell;
    if ptr.is_null() {
        tracing::error!("shell delegate called before the shell was installed");
        return None;
    }
    let result = {
        let Ok(mut shell) = (*ptr).try_borrow_mut() else {
            tracing::error!("re-entrant shell callback ignored");
            return None;
        };
        f(&mut shell)
    };
    flush_deferred();
    Some(result)
}

fn to_bool(b: bool) -> Bool {
    if b {
        YES
    } else {
        NO
    }
}

unsafe extern "C-unwind" fn will_finish_launching(this: &AnyObject, _cmd: Sel, _note: id) {
    with_shell(this, |shell| shell.on_will_finish_launching());
}

unsafe extern "C-unwind" fn did_finish_launching(this: &AnyObject, _cmd: Sel, _note: id) {
    with_shell(this, |shell| shell.on_did_finish_launching());
}

unsafe extern "C-unwind" fn should_terminate_after_last_window_closed(
    this: &AnyObject,
    _cmd: Sel,
    _sender: id,
) -> Bool {
    // Without a shell, keep running: quitting must stay explicit
    to_bool(with_shell(this, |shell| shell.on_last_window_closed()).unwrap_or(false))
}

unsafe extern "C-unwind" fn supports_secure_restorable_state(
    this: &AnyObject,
    _cmd: Sel,
    _app: id,
) -> Bool {
    to_bool(with_shell(this, |shell| shell.on_supports_secure_restorable_state()).unwrap_or(true))
}

unsafe extern "C-unwind" fn dock_menu(this: &AnyObject, _cmd: Sel, _sender: id) -> id {
    let target = this as *const AnyObject as id;
    match with_shell(this, |shell| shell.on_request_dock_menu()).flatten() {
        Some(menu) => {
            let ns_menu = build_ns_menu(&menu, target);
            msg_send![ns_menu, autorelease]
        }
        None => nil,
    }
}

unsafe extern "C-unwind" fn should_handle_reopen(
    this: &AnyObject,
    _cmd: Sel,
    _sender: id,
    has_visible_windows: Bool,
) -> Bool {
    to_bool(
        with_shell(this, |shell| shell.on_reopen(has_visible_windows.as_bool())).unwrap_or(true),
    )
}

unsafe extern "C-unwind" fn will_terminate(this: &AnyObject, _cmd: Sel, _note: id) {
    with_shell(this, |shell| shell.on_will_terminate());
}

unsafe extern "C-unwind" fn status_item_clicked(this: &AnyObject, _cmd: Sel, _sender: id) {
    if let Some(Err(e)) = with_shell(this, |shell| shell.on_indicator_clicked()) {
        // The action only ever fires while AppKit dispatches the click
        // event, so no current event means the platform broke its contract.
        tracing::error!(error = %e, "aborting");
        std::process::abort();
    }
}

unsafe extern "C-unwind" fn menu_item_invoked(this: &AnyObject, _cmd: Sel, sender: id) {
    if sender == nil {
        return;
    }
    let tag: isize = msg_send![sender, tag];
    let Some(action) = MenuAction::from_tag(tag) else {
        tracing::warn!(tag, "menu item with unknown action tag");
        return;
    };
    with_shell(this, |shell| shell.perform(action));
}
