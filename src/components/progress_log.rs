//! Progress log list: one line per milestone, in document order.

use leptos::prelude::*;

use crate::state::status::StatusState;

/// Milestone list from the status document.
#[component]
pub fn ProgressLog() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    let steps = move || {
        status
            .get()
            .data
            .map(|d| d.progress)
            .unwrap_or_default()
    };

    view! {
        <ul class="progress-log">
            {move || {
                steps()
                    .into_iter()
                    .map(|step| {
                        view! {
                            <li class="progress-log__item">
                                {step.time} " - " {step.status}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
