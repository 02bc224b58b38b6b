//! Platform-specific implementations.
//!
//! Only macOS is supported: the shell exists to supply menu bar and dock
//! chrome that the UI toolkit does not provide there.

#[cfg(target_os = "macos")]
pub mod macos;
