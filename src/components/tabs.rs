use leptos::prelude::*;

use crate::net::types::TransactionType;

/// Type filter tabs: All plus one tab per transaction kind.
#[component]
pub fn TypeTabs(
    #[prop(into)] selected: Signal<Option<TransactionType>>,
    on_select: Callback<Option<TransactionType>>,
) -> impl IntoView {
    let tab = move |kind: Option<TransactionType>, label: &'static str| {
        view! {
            <button
                class="tabs__tab"
                class=("tabs__tab--active", move || selected.get() == kind)
                on:click=move |_| on_select.run(kind)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="tabs">
            {tab(None, "All")}
            {TransactionType::ALL
                .into_iter()
                .map(|kind| tab(Some(kind), kind.label()))
                .collect::<Vec<_>>()}
        </div>
    }
}
