//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::{SessionContext, SessionHandle, SessionState};

/// Email/password sign-in form with a link to registration.
///
/// A visitor who is already signed in is sent on to the page they were
/// headed for (the `from` query parameter) or the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.with_value(SessionHandle::state);
    let pending = session.with_value(SessionHandle::pending);
    let error = session.with_value(SessionHandle::error);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let query = use_query_map();
    let navigate = use_navigate();
    Effect::new(move || {
        if state.with(SessionState::is_authenticated) {
            let target = query
                .with_untracked(|q| q.get("from"))
                .unwrap_or_else(|| "/".to_owned());
            navigate(&target, NavigateOptions::default());
        }
    });

    let submit = Callback::new(move |_: ()| {
        let address = email.get_untracked();
        let secret = password.get_untracked();
        if address.trim().is_empty() || secret.is_empty() {
            return;
        }
        session.with_value(|s| s.login(address.trim().to_owned(), secret));
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Fintrack"</h1>
                <p class="auth-card__tagline">"Income, expenses and savings in one place"</p>
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
                {move || error.get().map(|err| view! { <p class="auth-card__error">{err}</p> })}
                <button
                    class="btn btn--primary auth-card__submit"
                    disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__alt">"No account yet? " <a href="/register">"Register"</a></p>
            </div>
        </div>
    }
}
