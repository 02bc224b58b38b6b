//! macOS entry point.
//!
//! Loads the config, sets up logging, creates the application window and
//! the shell delegate, then hands control to the AppKit run loop.

use std::path::PathBuf;

use txtpocket_shell::logging::init_logging;
use txtpocket_shell::model::constants::CONFIG_FILE_NAME;
use txtpocket_shell::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, string_from_ns, NSApp,
};
use txtpocket_shell::platform::macos::ffi::NS_ACTIVATION_POLICY_REGULAR;
use txtpocket_shell::platform::macos::install_delegate;
use txtpocket_shell::platform::macos::ui::create_main_window;
use txtpocket_shell::ShellConfig;

/// Main entry point for macOS.
pub fn run() {
    autoreleasepool(|| unsafe {
        let path = config_path();
        let (config, config_error) = match path.as_deref().map(ShellConfig::load) {
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (ShellConfig::default(), Some(e)),
            None => (ShellConfig::default(), None),
        };

        if let Err(e) = init_logging(&config.log) {
            eprintln!("{e}");
        }
        if let Some(e) = config_error {
            tracing::warn!(error = %e, "using default config");
        }
        let config = config.with_env_overrides();

        let app = NSApp();
        let _: bool = msg_send![app, setActivationPolicy: NS_ACTIVATION_POLICY_REGULAR];

        // Created before the delegate so it is the app's first window
        let window = create_main_window(&config.app_name);
        install_delegate(&config);
        let _: () = msg_send![window, makeKeyAndOrderFront: nil];

        let _: () = msg_send![app, run];
    });
}

/// `<bundle>/Contents/Resources/shell.json`.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn config_path() -> Option<PathBuf> {
    let bundle: id = msg_send![get_class("NSBundle"), mainBundle];
    let resources: id = msg_send![bundle, resourcePath];
    string_from_ns(resources).map(|dir| PathBuf::from(dir).join(CONFIG_FILE_NAME))
}
