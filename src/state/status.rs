//! Status document state and the load-step outcome.
//!
//! DESIGN
//! ======
//! The decision taken after the fetch resolves (redirect vs. render) is a
//! pure function returning a command, so it stays testable without any
//! navigation side effects.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::MaintenanceStatus;

/// Static page the client navigates to when the document is an emergency.
pub const EMERGENCY_PAGE: &str = "emergency.html";

/// Loaded status document, `None` until the fetch resolves.
///
/// A failed fetch never populates this; the view stays on its loading
/// placeholder and the error goes to the console only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusState {
    pub data: Option<MaintenanceStatus>,
}

/// Side-effecting command produced by the load step.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Navigate away immediately; the detail view must never render.
    Redirect(&'static str),
    /// Store the document and start the progress timeline.
    Show(MaintenanceStatus),
}

/// Decide what to do with a freshly fetched status document.
#[must_use]
pub fn load_outcome(doc: MaintenanceStatus) -> LoadOutcome {
    if doc.is_emergency() {
        LoadOutcome::Redirect(EMERGENCY_PAGE)
    } else {
        LoadOutcome::Show(doc)
    }
}
