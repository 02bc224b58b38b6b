//! Shell domain model.
//!
//! This module contains pure data (no FFI dependencies): constants, menu
//! descriptions and icon resolution.
//!
//! The AppKit rendering of these types lives in `platform::macos::ui`.

pub mod constants;
pub mod icon;
pub mod menu;

pub use constants::*;
pub use icon::{resolve_icon_path, IconAppearance};
pub use menu::{ContextMenu, MenuAction, MenuEntry, MenuItem};
