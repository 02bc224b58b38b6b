//! AppKit UI pieces: menus, the status item and the application window.

pub mod menu;
pub mod status_item;
pub mod window;

pub use menu::build_ns_menu;
pub use window::create_main_window;
