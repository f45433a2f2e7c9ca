//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config;
use crate::net::types::RegisterRequest;
use crate::state::session::{SessionContext, SessionHandle, SessionState};

/// Account creation form; a successful registration signs the user in
/// directly and lands on the dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.with_value(SessionHandle::state);
    let pending = session.with_value(SessionHandle::pending);
    let error = session.with_value(SessionHandle::error);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let currency = RwSignal::new(config::CURRENCIES[0].to_owned());

    let navigate = use_navigate();
    Effect::new(move || {
        if state.with(SessionState::is_authenticated) {
            navigate("/", NavigateOptions::default());
        }
    });

    let submit = Callback::new(move |_: ()| {
        let request = RegisterRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            name: name.get_untracked().trim().to_owned(),
            currency: currency.get_untracked(),
        };
        if request.email.is_empty() || request.password.is_empty() || request.name.is_empty() {
            return;
        }
        session.with_value(move |s| s.register(request));
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Fintrack"</h1>
                <p class="auth-card__tagline">"Create an account"</p>
                <label class="auth-card__label">
                    "Name"
                    <input
                        class="auth-card__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-card__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="auth-card__label">
                    "Currency"
                    <select
                        class="auth-card__input"
                        prop:value=move || currency.get()
                        on:change=move |ev| currency.set(event_target_value(&ev))
                    >
                        {config::CURRENCIES
                            .iter()
                            .copied()
                            .map(|code| view! { <option value=code>{code}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                {move || error.get().map(|err| view! { <p class="auth-card__error">{err}</p> })}
                <button
                    class="btn btn--primary auth-card__submit"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-card__alt">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
