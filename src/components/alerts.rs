//! Success and error alert banners.
//!
//! Messages arrive through the shell's [`NotifyState`] slots and expire on
//! their own; the close buttons allow manual dismissal, which also cancels
//! the pending expiry.

use leptos::prelude::*;

use crate::state::notify::NotifyState;

/// Banner pair rendered at the top of the page.
#[component]
pub fn Alerts() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <Show when=move || notify.with(|n| n.success.is_some())>
            <div class="alert alert--success" role="alert">
                <strong>"Success! "</strong>
                {move || notify.with(|n| n.success.clone().unwrap_or_default())}
                <button
                    class="alert__close"
                    aria-label="Close"
                    on:click=move |_| notify.update(NotifyState::clear_success)
                >
                    "\u{d7}"
                </button>
            </div>
        </Show>
        <Show when=move || notify.with(|n| n.error.is_some())>
            <div class="alert alert--danger" role="alert">
                <strong>"Error! "</strong>
                {move || notify.with(|n| n.error.clone().unwrap_or_default())}
                <button
                    class="alert__close"
                    aria-label="Close"
                    on:click=move |_| notify.update(NotifyState::clear_error)
                >
                    "\u{d7}"
                </button>
            </div>
        </Show>
    }
}
