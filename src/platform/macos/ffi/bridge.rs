//! Thin layer over `objc2` for raw message sends.
//!
//! The shell talks to AppKit through untyped `id` pointers and `msg_send!`,
//! which keeps the delegate class registration and the host in the same
//! idiom. These helpers cover the handful of conversions that come up
//! everywhere.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr, CString};

pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};
pub use objc2_app_kit::NSApplication;
pub use objc2_core_foundation::CGFloat;
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use objc2::encode::Encode;

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// The shared `NSApplication` instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create a retained `NSString` from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Copy an `NSString` into an owned Rust string. `nil` maps to `None`.
///
/// # Safety
/// `s` must be `nil` or a valid `NSString`.
pub unsafe fn string_from_ns(s: id) -> Option<String> {
    if s.is_null() {
        return None;
    }
    let utf8: *const c_char = msg_send![s, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Get a class by name, panicking if not found.
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).expect("class name contains a NUL byte");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Instance variable access on classes registered with [`ClassBuilder`].
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T. Must be called from the main thread.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let c_name = CString::new(name).expect("ivar name contains a NUL byte");
        let ivar = self
            .class()
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let c_name = CString::new(name).expect("ivar name contains a NUL byte");
        let ivar = self
            .class()
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
