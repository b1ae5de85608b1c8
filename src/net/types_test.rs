use super::*;

const SAMPLE: &str = r#"{
    "type": "scheduled",
    "reason": "Database upgrade",
    "responsible": "Platform team",
    "startTime": "2026-08-30 01:00",
    "endTime": "2026-08-30 05:00",
    "progress": [
        {"time": "10:00", "status": "start"},
        {"time": "10:10", "status": "half"}
    ],
    "sns": [
        {"name": "X", "url": "https://x.example"}
    ]
}"#;

#[test]
fn sample_document_fields_survive_verbatim() {
    let doc: MaintenanceStatus = serde_json::from_str(SAMPLE).expect("valid document");
    assert_eq!(doc.kind, "scheduled");
    assert_eq!(doc.reason, "Database upgrade");
    assert_eq!(doc.responsible, "Platform team");
    assert_eq!(doc.start_time, "2026-08-30 01:00");
    assert_eq!(doc.end_time, "2026-08-30 05:00");
}

#[test]
fn progress_steps_keep_document_order() {
    let doc: MaintenanceStatus = serde_json::from_str(SAMPLE).expect("valid document");
    let steps: Vec<(&str, &str)> = doc
        .progress
        .iter()
        .map(|s| (s.time.as_str(), s.status.as_str()))
        .collect();
    assert_eq!(steps, vec![("10:00", "start"), ("10:10", "half")]);
}

#[test]
fn sns_links_carry_exact_urls() {
    let doc: MaintenanceStatus = serde_json::from_str(SAMPLE).expect("valid document");
    assert_eq!(doc.sns.len(), 1);
    assert_eq!(doc.sns[0].name, "X");
    assert_eq!(doc.sns[0].url, "https://x.example");
}

#[test]
fn missing_lists_default_to_empty() {
    let doc: MaintenanceStatus = serde_json::from_str(
        r#"{"type":"scheduled","reason":"r","responsible":"p","startTime":"a","endTime":"b"}"#,
    )
    .expect("valid document");
    assert!(doc.progress.is_empty());
    assert!(doc.sns.is_empty());
}

#[test]
fn emergency_type_is_detected() {
    let doc: MaintenanceStatus = serde_json::from_str(
        r#"{"type":"emergency","reason":"r","responsible":"p","startTime":"a","endTime":"b"}"#,
    )
    .expect("valid document");
    assert!(doc.is_emergency());

    let doc: MaintenanceStatus = serde_json::from_str(SAMPLE).expect("valid document");
    assert!(!doc.is_emergency());
}
