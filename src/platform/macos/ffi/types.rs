//! Object id aliases and AppKit enum values used by the shell.
//!
//! The aliases only name what a raw `id` points at; they carry no runtime
//! cost.

use super::bridge::id;

/// A reference to an NSWindow.
pub type WindowId = id;

/// A reference to an NSMenu.
pub type MenuId = id;

/// A reference to an NSStatusItem.
pub type StatusItemId = id;

/// A reference to an NSStatusBarButton.
pub type ButtonId = id;

/// A reference to an NSImage.
pub type ImageId = id;

// === NSEventType ===

pub const NS_EVENT_TYPE_LEFT_MOUSE_UP: u64 = 2;
pub const NS_EVENT_TYPE_RIGHT_MOUSE_UP: u64 = 4;

// === NSEventMask (1 << NSEventType) ===

pub const NS_EVENT_MASK_LEFT_MOUSE_UP: u64 = 1 << NS_EVENT_TYPE_LEFT_MOUSE_UP;
pub const NS_EVENT_MASK_RIGHT_MOUSE_UP: u64 = 1 << NS_EVENT_TYPE_RIGHT_MOUSE_UP;

// === NSWindowStyleMask ===

pub const NS_WINDOW_STYLE_TITLED: u64 = 1 << 0;
pub const NS_WINDOW_STYLE_CLOSABLE: u64 = 1 << 1;
pub const NS_WINDOW_STYLE_MINIATURIZABLE: u64 = 1 << 2;
pub const NS_WINDOW_STYLE_RESIZABLE: u64 = 1 << 3;

/// `NSBackingStoreBuffered`.
pub const NS_BACKING_STORE_BUFFERED: u64 = 2;

/// `NSApplicationActivationPolicyRegular`.
pub const NS_ACTIVATION_POLICY_REGULAR: i64 = 0;
