use super::*;

#[test]
fn status_fetch_failed_message_includes_http_status() {
    assert_eq!(status_fetch_failed_message(500), "status fetch failed: HTTP 500");
    assert_eq!(status_fetch_failed_message(404), "status fetch failed: HTTP 404");
}

#[test]
fn status_document_url_is_relative() {
    assert!(!STATUS_DOCUMENT_URL.starts_with('/'));
    assert!(!STATUS_DOCUMENT_URL.contains("://"));
}
