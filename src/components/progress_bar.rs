//! Animated progress bar fed by the timer-driven progress state.

use leptos::prelude::*;

use crate::state::progress::ProgressState;

/// Horizontal bar whose fill width tracks the progress percentage.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();

    let fill_width = move || format!("{}%", progress.get().width);
    let label = move || progress.get().label();

    view! {
        <div class="progress-bar">
            <div class="progress-bar__fill" style:width=fill_width>
                {label}
            </div>
        </div>
    }
}
