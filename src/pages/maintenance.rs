//! Maintenance page — fetches the status document on mount, drives the
//! progress timeline, and renders the three view branches.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged to the console and the page stays on the loading
//! placeholder indefinitely; there is no retry and no user-visible error.

use leptos::prelude::*;

use crate::components::detail_panel::DetailPanel;
use crate::components::login_gate::LoginGate;
use crate::state::login::LoginState;
use crate::state::progress::ProgressState;
use crate::state::status::StatusState;

/// The maintenance splash page.
///
/// On mount, one local task fetches `maintenance.json`, resolves the load
/// outcome (emergency redirect vs. render), and then steps the progress
/// timeline. Teardown cancels the task through a shared flag so no state
/// update lands after unmount.
#[component]
pub fn MaintenancePage() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();
    let progress = expect_context::<RwSignal<ProgressState>>();
    let login = expect_context::<RwSignal<LoginState>>();

    #[cfg(feature = "csr")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        use crate::state::status::{LoadOutcome, load_outcome};

        let cancelled = Rc::new(Cell::new(false));
        {
            let cancelled = Rc::clone(&cancelled);
            on_cleanup(move || cancelled.set(true));
        }

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_maintenance_status().await {
                Ok(doc) => {
                    if cancelled.get() {
                        return;
                    }
                    match load_outcome(doc) {
                        LoadOutcome::Redirect(path) => crate::util::browser::redirect(path),
                        LoadOutcome::Show(doc) => {
                            let total = doc.progress.len();
                            status.update(|s| s.data = Some(doc));
                            run_progress_timeline(progress, total, &cancelled).await;
                        }
                    }
                }
                Err(e) => leptos::logging::error!("maintenance status load failed: {e}"),
            }
        });
    }

    let banner = move || progress.get().banner.message();
    let logged_in = move || login.get().logged_in;
    let loaded = move || status.get().data.is_some();

    view! {
        <div class="maintenance-page">
            <h1 class="maintenance-page__banner">{banner}</h1>
            {move || {
                if !logged_in() {
                    view! { <LoginGate/> }.into_any()
                } else if loaded() {
                    view! { <DetailPanel/> }.into_any()
                } else {
                    view! { <p class="maintenance-page__loading">"Loading status..."</p> }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Step the progress bar once per interval, checking the cancellation flag
/// between ticks. Step 0 applies immediately so the first milestone shows as
/// soon as the document lands.
#[cfg(feature = "csr")]
async fn run_progress_timeline(
    progress: RwSignal<ProgressState>,
    total: usize,
    cancelled: &std::rc::Rc<std::cell::Cell<bool>>,
) {
    use crate::state::progress::STEP_INTERVAL_MS;

    for index in 0..total {
        if index > 0 {
            gloo_timers::future::sleep(std::time::Duration::from_millis(STEP_INTERVAL_MS)).await;
        }
        if cancelled.get() {
            return;
        }
        progress.update(|p| p.apply_step(index, total));
    }
}
