//! Detail panel: document metadata, progress bar, log, and SNS links.

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::components::progress_log::ProgressLog;
use crate::components::sns_links::SnsLinks;
use crate::net::types::MaintenanceStatus;
use crate::state::status::StatusState;

/// Full maintenance detail view, rendered only once the gate is open and
/// the status document has loaded.
#[component]
pub fn DetailPanel() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    let field = move |pick: fn(&MaintenanceStatus) -> String| {
        status.get().data.as_ref().map(pick).unwrap_or_default()
    };

    view! {
        <section class="detail-panel">
            <p>"Maintenance type: " <strong>{move || field(|d| d.kind.clone())}</strong></p>
            <p>"Reason: " <strong>{move || field(|d| d.reason.clone())}</strong></p>
            <p>"Responsible: " <strong>{move || field(|d| d.responsible.clone())}</strong></p>
            <p>"Start time: " {move || field(|d| d.start_time.clone())}</p>
            <p>"Expected end: " {move || field(|d| d.end_time.clone())}</p>

            <ProgressBar/>

            <h2 class="detail-panel__heading">"Progress"</h2>
            <ProgressLog/>

            <h2 class="detail-panel__heading">"Follow us"</h2>
            <SnsLinks/>
        </section>
    }
}
