//! Root application component with shared state context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::maintenance::MaintenancePage;
use crate::state::{login::LoginState, progress::ProgressState, status::StatusState};

/// Root application component.
///
/// Provides one `RwSignal` context per state domain and renders the single
/// maintenance view. There is no router: the only navigation this app ever
/// performs is a hard redirect to the static emergency page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let status = RwSignal::new(StatusState::default());
    let progress = RwSignal::new(ProgressState::default());
    let login = RwSignal::new(LoginState::default());

    provide_context(status);
    provide_context(progress);
    provide_context(login);

    view! {
        <Title text="Site Maintenance"/>

        <MaintenancePage/>
    }
}
