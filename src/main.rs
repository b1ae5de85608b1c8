//! CSR entry point — mounts the app to `<body>` when built for the browser.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(maintpage::app::App);
    }
}
