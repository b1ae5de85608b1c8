//! Fetch helper for the status document.
//!
//! Browser (`csr`): a real HTTP call via `gloo-net` with the cache disabled
//! so a stale document never lingers across deploys. Off-browser: a stub
//! returning an error.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` instead of panics; a failed fetch is logged to the
//! console by the page and leaves the view on its loading placeholder.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::MaintenanceStatus;

/// Relative URL of the status document, served next to the page.
pub const STATUS_DOCUMENT_URL: &str = "maintenance.json";

#[cfg(any(test, feature = "csr"))]
fn status_fetch_failed_message(status: u16) -> String {
    format!("status fetch failed: HTTP {status}")
}

/// Fetch and deserialize the maintenance status document.
///
/// # Errors
///
/// Returns an error string on network failure, a non-2xx response, or a
/// document that does not match the expected shape.
pub async fn fetch_maintenance_status() -> Result<MaintenanceStatus, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(STATUS_DOCUMENT_URL)
            .cache(web_sys::RequestCache::NoCache)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_fetch_failed_message(resp.status()));
        }
        resp.json::<MaintenanceStatus>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
