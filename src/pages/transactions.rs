//! Transactions page: type tabs, paged table, new-transaction dialog.

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::components::pagination::Pagination;
use crate::components::route_guard::RouteGuard;
use crate::components::tabs::TypeTabs;
use crate::components::transaction_form::TransactionForm;
use crate::components::transaction_table::TransactionTable;
use crate::net::abort::AbortGuard;
use crate::net::client::{Api, ApiContext};
use crate::net::types::TransactionType;
use crate::state::caches::Caches;
use crate::state::session::{SessionContext, SessionHandle};
use crate::state::{goals, tags, transactions};

/// Route component for `/transactions`.
#[component]
pub fn TransactionsPage() -> impl IntoView {
    view! {
        <RouteGuard>
            <AppLayout>
                <TransactionsView />
            </AppLayout>
        </RouteGuard>
    }
}

/// The signed-in transactions body.
#[component]
fn TransactionsView() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<SessionContext>();
    let caches = expect_context::<Caches>();
    let state = session.with_value(SessionHandle::state);
    let cache = caches.transactions;

    let page = RwSignal::new(1_u64);
    let kind = RwSignal::new(None::<TransactionType>);
    let show_form = RwSignal::new(false);

    // Dropped on unmount, which aborts whatever is still in flight.
    let abort = StoredValue::new_local(AbortGuard::new());

    Effect::new(move || {
        caches.transactions_tick();
        // Rerun when a fetch settles, so a page or tab picked while
        // another fetch was loading is not silently skipped.
        cache.track();
        let Some(user_id) = state.with(|s| s.user().map(|u| u.id.clone())) else {
            return;
        };
        let page = page.get();
        let kind = kind.get();
        let api = api.with_value(Api::clone);
        let signal = abort.with_value(AbortGuard::signal);
        leptos::task::spawn_local(async move {
            transactions::ensure_fresh(&api, cache, &user_id, page, kind, signal.as_ref()).await;
        });
    });

    // Tag and goal labels for the rows; the dialog selects reuse them.
    Effect::new(move || {
        caches.tags_tick();
        caches.goals_tick();
        let Some(user_id) = state.with(|s| s.user().map(|u| u.id.clone())) else {
            return;
        };
        let api = api.with_value(Api::clone);
        let signal = abort.with_value(AbortGuard::signal);
        leptos::task::spawn_local(async move {
            futures::join!(
                tags::ensure_fresh(&api, caches.tags, &user_id, signal.as_ref()),
                goals::ensure_fresh(&api, caches.goals, &user_id, signal.as_ref()),
            );
        });
    });

    let items = Signal::derive(move || cache.with(|t| t.items.clone()));
    let pages = Signal::derive(move || cache.with(|t| t.page_count()));

    let on_tab = Callback::new(move |selected: Option<TransactionType>| {
        kind.set(selected);
        page.set(1);
    });
    let on_page = Callback::new(move |n: u64| page.set(n));
    let close_form = Callback::new(move |_: ()| show_form.set(false));

    view! {
        <div class="transactions">
            <div class="page__header">
                <h1 class="page__title">"Transactions"</h1>
                <button class="btn btn--primary" on:click=move |_| show_form.set(true)>
                    "New transaction"
                </button>
            </div>

            <TypeTabs selected=kind on_select=on_tab />

            {move || {
                cache
                    .with(|t| t.error.clone())
                    .map(|err| view! { <p class="transactions__error">{err}</p> })
            }}

            <TransactionTable transactions=items />
            <Pagination page=page pages=pages on_page=on_page />

            <Show when=move || show_form.get()>
                <TransactionForm on_close=close_form />
            </Show>
        </div>
    }
}
