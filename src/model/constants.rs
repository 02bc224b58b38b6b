//! Shell constants and default values.
//!
//! This module contains the application name, the icon asset layout inside
//! the bundle, status bar geometry and menu key equivalents.

// === Application ===

/// Default application name shown in menu titles.
pub const DEFAULT_APP_NAME: &str = "TxtPocket";

// === Icon asset layout ===

/// Framework bundle that carries the UI toolkit's assets.
pub const ICON_FRAMEWORK: &str = "App.framework";

/// Icon location relative to [`ICON_FRAMEWORK`].
pub const ICON_ASSET_PATH: &str = "Resources/flutter_assets/assets/app_icon.png";

/// Status bar icon edge length in points (18x18 is the menu bar standard).
pub const ICON_SIZE: f64 = 18.0;

/// Title shown on the status item when the icon cannot be loaded.
pub const FALLBACK_TITLE: &str = "T";

// === Status bar ===

/// `NSVariableStatusItemLength`.
pub const VARIABLE_STATUS_ITEM_LENGTH: f64 = -1.0;

/// Gap in points between the top of the status button and a popped-up menu.
pub const MENU_VERTICAL_OFFSET: f64 = 5.0;

// === Menus ===

/// Key equivalent bound to every quit entry.
pub const QUIT_KEY_EQUIVALENT: &str = "q";

/// Title of the dock menu quit entry.
pub const DOCK_QUIT_TITLE: &str = "Quit";

// === Configuration ===

/// Config file looked up in the bundle's Resources directory.
pub const CONFIG_FILE_NAME: &str = "shell.json";

/// Env var overriding the configured shell variant.
pub const ENV_VARIANT: &str = "TXTPOCKET_SHELL_VARIANT";

/// Env var overriding the configured application name.
pub const ENV_APP_NAME: &str = "TXTPOCKET_APP_NAME";

/// Default log filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
