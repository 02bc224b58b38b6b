#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

#[cfg(target_os = "macos")]
mod macos_main;

fn main() {
    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        let config = txtpocket_shell::ShellConfig::default();
        if let Err(e) = txtpocket_shell::logging::init_logging(&config.log) {
            eprintln!("{e}");
        }
        tracing::error!("the TxtPocket shell only runs on macOS");
        std::process::exit(1);
    }
}
