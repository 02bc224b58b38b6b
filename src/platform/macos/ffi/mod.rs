//! FFI helpers for AppKit via objc2.

pub mod bridge;
pub mod types;

pub use types::*;
