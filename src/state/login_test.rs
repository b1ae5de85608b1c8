use super::*;

#[test]
fn login_state_default_is_closed_and_logged_out() {
    let s = LoginState::default();
    assert!(!s.logged_in);
    assert!(!s.show_form);
    assert!(s.password.is_empty());
}

#[test]
fn toggle_form_flips_visibility() {
    let mut s = LoginState::default();
    s.toggle_form();
    assert!(s.show_form);
    s.toggle_form();
    assert!(!s.show_form);
}

#[test]
fn submit_correct_password_opens_gate_and_hides_form() {
    let mut s = LoginState { show_form: true, password: ADMIN_PASSWORD.to_owned(), ..LoginState::default() };
    assert!(s.submit());
    assert!(s.logged_in);
    assert!(!s.show_form);
    assert!(s.password.is_empty());
}

#[test]
fn submit_wrong_password_changes_nothing() {
    let mut s = LoginState { show_form: true, password: "hunter2".to_owned(), ..LoginState::default() };
    assert!(!s.submit());
    assert!(!s.logged_in);
    assert!(s.show_form, "form stays open for retry");
    assert_eq!(s.password, "hunter2");
}

#[test]
fn submit_empty_password_is_a_mismatch() {
    let mut s = LoginState { show_form: true, ..LoginState::default() };
    assert!(!s.submit());
    assert!(!s.logged_in);
}
