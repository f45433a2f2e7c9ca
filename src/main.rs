//! Browser entry point: installs the panic hook and console logger,
//! then mounts [`fintrack::app::App`] onto `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        let _ = console_log::init_with_level(level);
        log::info!("fintrack starting");

        leptos::mount::mount_to_body(fintrack::app::App);
    }
}
