//! Goals page: progress cards and the new-goal dialog.

use leptos::prelude::*;

use crate::components::goal_card::GoalCard;
use crate::components::goal_form::GoalForm;
use crate::components::layout::AppLayout;
use crate::components::route_guard::RouteGuard;
use crate::net::abort::AbortGuard;
use crate::net::client::{Api, ApiContext};
use crate::state::caches::Caches;
use crate::state::goals;
use crate::state::session::{SessionContext, SessionHandle};

/// Route component for `/goals`.
#[component]
pub fn GoalsPage() -> impl IntoView {
    view! {
        <RouteGuard>
            <AppLayout>
                <GoalsView />
            </AppLayout>
        </RouteGuard>
    }
}

/// The signed-in goals body.
#[component]
fn GoalsView() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<SessionContext>();
    let caches = expect_context::<Caches>();
    let state = session.with_value(SessionHandle::state);
    let cache = caches.goals;

    let show_form = RwSignal::new(false);

    // Dropped on unmount, which aborts whatever is still in flight.
    let abort = StoredValue::new_local(AbortGuard::new());

    Effect::new(move || {
        caches.goals_tick();
        let Some(user_id) = state.with(|s| s.user().map(|u| u.id.clone())) else {
            return;
        };
        let api = api.with_value(Api::clone);
        let signal = abort.with_value(AbortGuard::signal);
        leptos::task::spawn_local(async move {
            goals::ensure_fresh(&api, cache, &user_id, signal.as_ref()).await;
        });
    });

    let close_form = Callback::new(move |_: ()| show_form.set(false));

    view! {
        <div class="goals">
            <div class="page__header">
                <h1 class="page__title">"Goals"</h1>
                <button class="btn btn--primary" on:click=move |_| show_form.set(true)>
                    "New goal"
                </button>
            </div>

            {move || {
                cache
                    .with(|g| g.error.clone())
                    .map(|err| view! { <p class="goals__error">{err}</p> })
            }}

            {move || {
                let items = cache.with(|g| g.items.clone());
                if items.is_empty() {
                    return view! {
                        <p class="goals__empty">"No goals yet. Set one and start saving toward it."</p>
                    }
                        .into_any();
                }
                view! {
                    <div class="goals__grid">
                        {items
                            .into_iter()
                            .map(|goal| view! { <GoalCard goal=goal /> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}

            <Show when=move || show_form.get()>
                <GoalForm on_close=close_form />
            </Show>
        </div>
    }
}
