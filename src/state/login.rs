//! Admin login gate state.
//!
//! The credential is a literal compared client-side. This is a cosmetic
//! gate for a splash page, not a security boundary.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

/// The hard-coded admin password.
pub const ADMIN_PASSWORD: &str = "admin";

/// Alert text shown on a mismatched password.
pub const WRONG_PASSWORD_ALERT: &str = "Incorrect password";

/// Transient login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub logged_in: bool,
    pub show_form: bool,
    pub password: String,
}

impl LoginState {
    /// Show or hide the password form.
    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    /// Check the entered password. On a match the gate opens and the form
    /// hides; on a mismatch nothing changes and the caller raises the alert.
    pub fn submit(&mut self) -> bool {
        if self.password == ADMIN_PASSWORD {
            self.logged_in = true;
            self.show_form = false;
            self.password.clear();
            true
        } else {
            false
        }
    }
}
