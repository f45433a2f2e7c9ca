use leptos::prelude::*;

use crate::state::toasts::ToastState;

/// Fixed overlay rendering the toast queue, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts">
            {move || {
                toasts.with(|t| {
                    t.toasts
                        .iter()
                        .map(|toast| {
                            let id = toast.id.clone();
                            view! {
                                <div class=format!("toast {}", toast.kind.class())>
                                    <span class="toast__message">{toast.message.clone()}</span>
                                    <button
                                        class="toast__dismiss"
                                        on:click=move |_| toasts.update(|t| t.dismiss(&id))
                                    >
                                        "\u{d7}"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}
