//! macOS implementation using AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI helpers for raw message sends
//! - The application delegate class that forwards to the shell
//! - `AppKitHost`, the AppKit side of the shell host traits
//! - UI pieces (status item, menus, application window)

pub mod app;
pub mod ffi;
pub mod host;
pub mod ui;

pub use app::install_delegate;
pub use ffi::bridge;
pub use host::AppKitHost;
