//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the splash-page chrome while reading/writing shared
//! state from Leptos context providers.

pub mod detail_panel;
pub mod login_gate;
pub mod progress_bar;
pub mod progress_log;
pub mod sns_links;
