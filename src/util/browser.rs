//! Browser glue: hard navigation and blocking alerts.
//!
//! Both calls require a browser environment and compile to inert stubs
//! off-`csr` so native test builds never touch `web-sys`.

/// Navigate the window to `path`, replacing this page.
pub fn redirect(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Show a blocking modal alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
