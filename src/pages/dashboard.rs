//! Dashboard: headline cards, monthly chart, month selector, breakdown.
//!
//! The cards always show the running month (the short summary has no
//! month parameter); the chart and the table follow the selector.

use leptos::prelude::*;

use crate::components::charts::{ChartSpec, OverviewChart};
use crate::components::layout::AppLayout;
use crate::components::route_guard::RouteGuard;
use crate::components::summary_cards::SummaryCards;
use crate::components::transaction_table::TransactionTable;
use crate::net::abort::AbortGuard;
use crate::net::client::{Api, ApiContext};
use crate::state::caches::Caches;
use crate::state::session::{SessionContext, SessionHandle};
use crate::state::summary;
use crate::util::dates;

/// Route component for `/`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RouteGuard>
            <AppLayout>
                <DashboardView />
            </AppLayout>
        </RouteGuard>
    }
}

/// The signed-in dashboard body.
#[component]
fn DashboardView() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<SessionContext>();
    let caches = expect_context::<Caches>();
    let state = session.with_value(SessionHandle::state);
    let cache = caches.summary;

    let (current_month, current_year) = dates::current_month_year();
    let month = RwSignal::new(current_month);
    let year = RwSignal::new(current_year);

    // Dropped on unmount, which aborts whatever is still in flight.
    let abort = StoredValue::new_local(AbortGuard::new());

    Effect::new(move || {
        caches.summary_tick();
        // Rerun when a fetch settles, so a month picked while another
        // fetch was loading is not silently skipped.
        cache.track();
        let Some(user_id) = state.with(|s| s.user().map(|u| u.id.clone())) else {
            return;
        };
        let month = month.get();
        let year = year.get();
        let api = api.with_value(Api::clone);
        let signal = abort.with_value(AbortGuard::signal);
        leptos::task::spawn_local(async move {
            summary::ensure_fresh(&api, cache, &user_id, month, year, signal.as_ref()).await;
        });
    });

    let short = Signal::derive(move || cache.with(|s| s.short.clone()));
    let spec = Signal::derive(move || {
        cache.with(|s| {
            s.monthly
                .as_ref()
                .map_or_else(ChartSpec::default, ChartSpec::from_monthly_summary)
        })
    });
    let monthly_transactions = Signal::derive(move || {
        cache.with(|s| {
            s.monthly
                .as_ref()
                .map(|m| m.transactions.clone())
                .unwrap_or_default()
        })
    });

    let step_back = move |_| {
        let (m, y) = dates::previous_month(month.get_untracked(), year.get_untracked());
        month.set(m);
        year.set(y);
    };
    let step_forward = move |_| {
        let (m, y) = dates::next_month(month.get_untracked(), year.get_untracked());
        month.set(m);
        year.set(y);
    };

    view! {
        <div class="dashboard">
            <h1 class="page__title">"This month"</h1>
            <SummaryCards summary=short />

            <div class="dashboard__selector">
                <button class="dashboard__step" on:click=step_back>
                    "<"
                </button>
                <span class="dashboard__month">
                    {move || format!("{} {}", dates::month_name(month.get()), year.get())}
                </span>
                <button class="dashboard__step" on:click=step_forward>
                    ">"
                </button>
            </div>

            {move || {
                cache
                    .with(|s| s.error.clone())
                    .map(|err| view! { <p class="dashboard__error">{err}</p> })
            }}

            <Show
                when=move || spec.with(|s| !s.is_empty())
                fallback=|| {
                    view! { <p class="dashboard__empty">"No activity recorded this month."</p> }
                }
            >
                <OverviewChart spec=spec />
            </Show>

            <h2 class="page__subtitle">"Transactions"</h2>
            <TransactionTable transactions=monthly_transactions />
        </div>
    }
}
