//! Admin login gate: toggle button plus a conditional password form.

use leptos::prelude::*;

use crate::state::login::{LoginState, WRONG_PASSWORD_ALERT};

/// Toggleable password form guarding the detail panel.
///
/// Submit checks the literal credential in [`LoginState::submit`]; a
/// mismatch raises a blocking alert and leaves the form open for retry.
#[component]
pub fn LoginGate() -> impl IntoView {
    let login = expect_context::<RwSignal<LoginState>>();

    let show_form = move || login.get().show_form;
    let toggle_label = move || if show_form() { "Close" } else { "Log in" };

    let on_toggle = move |_| login.update(LoginState::toggle_form);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut ok = false;
        login.update(|l| ok = l.submit());
        if !ok {
            crate::util::browser::alert(WRONG_PASSWORD_ALERT);
        }
    };

    view! {
        <div class="login-gate">
            <button class="login-gate__toggle" on:click=on_toggle>
                {toggle_label}
            </button>
            <Show when=show_form>
                <form class="login-gate__form" on:submit=on_submit>
                    <input
                        class="login-gate__input"
                        type="password"
                        placeholder="Admin password"
                        prop:value=move || login.get().password
                        on:input=move |ev| {
                            login.update(|l| l.password = event_target_value(&ev));
                        }
                    />
                    <button class="login-gate__submit" type="submit">
                        "Log in"
                    </button>
                </form>
            </Show>
        </div>
    }
}
