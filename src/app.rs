//! Root component: context wiring, theme, routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::client::{Api, ApiContext};
use crate::pages::{
    dashboard::DashboardPage, goals::GoalsPage, login::LoginPage, register::RegisterPage,
    settings::SettingsPage, transactions::TransactionsPage,
};
use crate::state::caches::Caches;
use crate::state::session::{SessionContext, SessionHandle};
use crate::state::store::TokenStore;
use crate::state::toasts::ToastState;
use crate::state::ui::UiState;
use crate::util::prefs;

/// Root application component.
///
/// Builds the API client and the session handle, wires the refresh
/// callbacks between them, restores the stored session, provides every
/// shared context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = TokenStore::browser();
    let caches = Caches::new();
    let api = Api::new(store.clone());
    let session = SessionHandle::new(api.clone(), store, caches);

    // The refresh cycle feeds session transitions back in from the
    // client: a rotated token updates the session, a failed refresh
    // signs it out.
    {
        let handle = session.clone();
        api.set_on_refreshed(move |token| handle.sync_token(token));
        let handle = session.clone();
        api.set_on_session_expired(move || handle.expire());
    }

    session.restore();

    let ui = RwSignal::new(UiState::load());
    let toasts = RwSignal::new(ToastState::default());

    let api_context: ApiContext = StoredValue::new_local(api);
    let session_context: SessionContext = StoredValue::new_local(session);
    provide_context(api_context);
    provide_context(session_context);
    provide_context(caches);
    provide_context(ui);
    provide_context(toasts);

    // Keep the <html> class in step with the signal wherever it is
    // toggled from.
    Effect::new(move || {
        prefs::apply_dark_mode(ui.with(|u| u.dark_mode));
    });

    view! {
        <Title text="Fintrack" />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage />
                <Route path=StaticSegment("register") view=RegisterPage />
                <Route path=StaticSegment("") view=DashboardPage />
                <Route path=StaticSegment("transactions") view=TransactionsPage />
                <Route path=StaticSegment("goals") view=GoalsPage />
                <Route path=StaticSegment("settings") view=SettingsPage />
            </Routes>
        </Router>
    }
}
