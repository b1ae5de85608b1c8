use super::*;
use crate::net::types::{EMERGENCY_TYPE, MaintenanceStatus};

fn doc(kind: &str) -> MaintenanceStatus {
    MaintenanceStatus {
        kind: kind.to_owned(),
        reason: "Database upgrade".to_owned(),
        responsible: "Platform team".to_owned(),
        start_time: "01:00".to_owned(),
        end_time: "05:00".to_owned(),
        progress: Vec::new(),
        sns: Vec::new(),
    }
}

#[test]
fn status_state_default_has_no_data() {
    assert!(StatusState::default().data.is_none());
}

#[test]
fn emergency_document_redirects_to_static_page() {
    assert_eq!(load_outcome(doc(EMERGENCY_TYPE)), LoadOutcome::Redirect(EMERGENCY_PAGE));
}

#[test]
fn regular_document_is_shown_intact() {
    let outcome = load_outcome(doc("scheduled"));
    let LoadOutcome::Show(shown) = outcome else {
        panic!("expected Show, got {outcome:?}");
    };
    assert_eq!(shown, doc("scheduled"));
}

#[test]
fn sentinel_comparison_is_exact() {
    assert!(matches!(load_outcome(doc("Emergency")), LoadOutcome::Show(_)));
    assert!(matches!(load_outcome(doc("emergency!")), LoadOutcome::Show(_)));
}
