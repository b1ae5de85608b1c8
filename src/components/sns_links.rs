//! SNS link list; every link opens in a new browsing context.

use leptos::prelude::*;

use crate::state::status::StatusState;

/// External link list from the status document.
#[component]
pub fn SnsLinks() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();

    let links = move || status.get().data.map(|d| d.sns).unwrap_or_default();

    view! {
        <ul class="sns-links">
            {move || {
                links()
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li class="sns-links__item">
                                <a
                                    class="sns-links__anchor"
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {link.name}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
