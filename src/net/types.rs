//! Wire DTOs for the maintenance status document.
//!
//! DESIGN
//! ======
//! These types mirror the JSON served as `maintenance.json` so serde reads
//! stay lossless. Timestamps are opaque display strings by contract and are
//! never parsed as dates. List fields default to empty so a sparse document
//! still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `type` value that triggers an immediate redirect instead of rendering.
pub const EMERGENCY_TYPE: &str = "emergency";

/// The maintenance status document, immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceStatus {
    /// Category tag; [`EMERGENCY_TYPE`] causes a redirect.
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form reason for the maintenance, displayed verbatim.
    pub reason: String,
    /// Who is running the maintenance, displayed verbatim.
    pub responsible: String,
    /// Opaque display string for the start of the window.
    pub start_time: String,
    /// Opaque display string for the expected end of the window.
    pub end_time: String,
    /// Ordered milestones; insertion order is display and animation order.
    #[serde(default)]
    pub progress: Vec<ProgressStep>,
    /// Ordered external links shown under the detail panel.
    #[serde(default)]
    pub sns: Vec<SnsLink>,
}

impl MaintenanceStatus {
    /// Whether this document demands the emergency redirect.
    #[must_use]
    pub fn is_emergency(&self) -> bool {
        self.kind == EMERGENCY_TYPE
    }
}

/// One milestone in the maintenance timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStep {
    /// Opaque display string for when the milestone happened.
    pub time: String,
    /// What happened at the milestone.
    pub status: String,
}

/// A social-media link rendered in the detail panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnsLink {
    /// Link label.
    pub name: String,
    /// Destination URL, opened in a new browsing context.
    pub url: String,
}
