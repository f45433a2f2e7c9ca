use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::toast::ToastHost;
use crate::state::session::{SessionContext, SessionHandle};

/// Application shell around every signed-in page: top bar with
/// navigation, the user's name, sign-out, and the toast overlay.
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.with_value(SessionHandle::state);

    let location = use_location();
    let path = location.pathname;

    let nav_link = move |href: &'static str, label: &'static str| {
        view! {
            <a
                href=href
                class="topbar__link"
                class=("topbar__link--active", move || path.get() == href)
            >
                {label}
            </a>
        }
    };

    let name = move || {
        state.with(|s| {
            s.user()
                .map(|user| user.display_name().to_owned())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="app">
            <header class="topbar">
                <a href="/" class="topbar__brand">
                    "Fintrack"
                </a>
                <nav class="topbar__nav">
                    {nav_link("/", "Dashboard")}
                    {nav_link("/transactions", "Transactions")}
                    {nav_link("/goals", "Goals")}
                    {nav_link("/settings", "Settings")}
                </nav>
                <div class="topbar__user">
                    <span class="topbar__name">{name}</span>
                    <button
                        class="btn topbar__signout"
                        on:click=move |_| session.with_value(SessionHandle::logout)
                    >
                        "Sign out"
                    </button>
                </div>
            </header>
            <main class="page">{children()}</main>
            <ToastHost />
        </div>
    }
}
