//! Context menu model (pure Rust, no FFI).
//!
//! Menus are described as plain data and turned into `NSMenu` instances by
//! the platform layer. Each item carries a [`MenuAction`] which travels
//! through AppKit as the menu item's integer tag, so a single action
//! selector serves every entry.

use super::constants::*;

/// What a menu entry does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Bring the application window to the front.
    ShowWindow,
    /// Terminate the application.
    Terminate,
}

impl MenuAction {
    /// Integer tag stored on the native menu item.
    pub fn tag(self) -> isize {
        match self {
            MenuAction::ShowWindow => 1,
            MenuAction::Terminate => 2,
        }
    }

    /// Inverse of [`MenuAction::tag`]. Unknown tags map to `None`.
    pub fn from_tag(tag: isize) -> Option<Self> {
        match tag {
            1 => Some(MenuAction::ShowWindow),
            2 => Some(MenuAction::Terminate),
            _ => None,
        }
    }
}

/// A clickable menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Empty string means no key equivalent.
    pub key_equivalent: String,
    pub action: MenuAction,
}

/// One row of a [`ContextMenu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

impl MenuEntry {
    pub fn item(label: impl Into<String>, key_equivalent: &str, action: MenuAction) -> Self {
        MenuEntry::Item(MenuItem {
            label: label.into(),
            key_equivalent: key_equivalent.to_string(),
            action,
        })
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, MenuEntry::Separator)
    }

    /// Label of the entry, `None` for separators.
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Item(item) => Some(&item.label),
            MenuEntry::Separator => None,
        }
    }
}

/// Ordered list of menu entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    entries: Vec<MenuEntry>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: MenuEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the dock menu: "Show <app>", separator, "Quit".
    pub fn dock(app_name: &str) -> Self {
        let mut menu = Self::new();
        menu.push(MenuEntry::item(
            format!("Show {app_name}"),
            "",
            MenuAction::ShowWindow,
        ))
        .push(MenuEntry::Separator)
        .push(MenuEntry::item(
            DOCK_QUIT_TITLE,
            QUIT_KEY_EQUIVALENT,
            MenuAction::Terminate,
        ));
        menu
    }

    /// Build the status bar menu: a single "Quit <app>" entry.
    pub fn status_bar(app_name: &str) -> Self {
        let mut menu = Self::new();
        menu.push(MenuEntry::item(
            format!("Quit {app_name}"),
            QUIT_KEY_EQUIVALENT,
            MenuAction::Terminate,
        ));
        menu
    }
}
