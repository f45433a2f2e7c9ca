//! Settings page: appearance, default currency, tag management.

use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::components::route_guard::RouteGuard;
use crate::components::tag_form::TagForm;
use crate::config;
use crate::net;
use crate::net::abort::AbortGuard;
use crate::net::client::{Api, ApiContext};
use crate::net::types::Tag;
use crate::state::caches::Caches;
use crate::state::session::{SessionContext, SessionHandle};
use crate::state::tags;
use crate::state::toasts::{self, ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::util::prefs;

/// Route component for `/settings`.
#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <RouteGuard>
            <AppLayout>
                <SettingsView />
            </AppLayout>
        </RouteGuard>
    }
}

/// The signed-in settings body.
#[component]
fn SettingsView() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<SessionContext>();
    let caches = expect_context::<Caches>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let state = session.with_value(SessionHandle::state);

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Tag>);

    // Dropped on unmount, which aborts whatever is still in flight.
    let abort = StoredValue::new_local(AbortGuard::new());

    Effect::new(move || {
        caches.tags_tick();
        let Some(user_id) = state.with(|s| s.user().map(|u| u.id.clone())) else {
            return;
        };
        let api = api.with_value(Api::clone);
        let signal = abort.with_value(AbortGuard::signal);
        leptos::task::spawn_local(async move {
            tags::ensure_fresh(&api, caches.tags, &user_id, signal.as_ref()).await;
        });
    });

    let toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = !u.dark_mode);
        prefs::save_dark_mode(ui.with_untracked(|u| u.dark_mode));
    };
    let pick_currency = move |ev| {
        let value = event_target_value(&ev);
        prefs::save_currency(&value);
        ui.update(|u| u.currency = value);
    };

    let open_create = move |_| {
        editing.set(None);
        show_form.set(true);
    };
    let close_form = Callback::new(move |_: ()| show_form.set(false));

    let delete_tag = Callback::new(move |id: String| {
        let api = api.with_value(Api::clone);
        leptos::task::spawn_local(async move {
            match net::tags::remove(&api, &id).await {
                Ok(()) => {
                    caches.tags.update(|t| t.remove(&id));
                    // Rows referencing the tag need a refetch to drop it.
                    caches.reload_transactions();
                    toasts::show(toasts, ToastKind::Success, "Tag deleted");
                }
                Err(err) => {
                    log::warn!("tag delete failed: {err}");
                    toasts::show(toasts, ToastKind::Error, &err.to_string());
                }
            }
        });
    });

    view! {
        <div class="settings">
            <h1 class="page__title">"Settings"</h1>

            <section class="settings__section">
                <h2 class="page__subtitle">"Appearance"</h2>
                <label class="settings__row">
                    <span>"Dark mode"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || ui.with(|u| u.dark_mode)
                        on:change=toggle_dark
                    />
                </label>
            </section>

            <section class="settings__section">
                <h2 class="page__subtitle">"Default currency"</h2>
                <select
                    class="dialog__input settings__currency"
                    prop:value=move || ui.with(|u| u.currency.clone())
                    on:change=pick_currency
                >
                    {config::CURRENCIES
                        .iter()
                        .copied()
                        .map(|code| view! { <option value=code>{code}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </section>

            <section class="settings__section">
                <div class="page__header">
                    <h2 class="page__subtitle">"Tags"</h2>
                    <button class="btn btn--primary" on:click=open_create>
                        "New tag"
                    </button>
                </div>
                {move || {
                    let items = caches.tags.with(|t| t.items.clone());
                    if items.is_empty() {
                        return view! {
                            <p class="settings__empty">"No tags yet. Create one to label your spending."</p>
                        }
                            .into_any();
                    }
                    view! {
                        <ul class="settings__tags">
                            {items
                                .into_iter()
                                .map(|tag| {
                                    let id = tag.id.clone();
                                    let edit_target = tag.clone();
                                    view! {
                                        <li class="settings__tag">
                                            <span
                                                class="tag-chip"
                                                style:background-color=tag.color_bg.clone()
                                                style:color=tag.color_text.clone()
                                            >
                                                {tag.name.clone()}
                                            </span>
                                            <span class="settings__tag-actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| {
                                                        editing.set(Some(edit_target.clone()));
                                                        show_form.set(true);
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| delete_tag.run(id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>

            {move || {
                show_form
                    .get()
                    .then(|| view! { <TagForm existing=editing.get() on_close=close_form /> })
            }}
        </div>
    }
}
