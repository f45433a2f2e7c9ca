//! Page picker for the transaction list.
//!
//! Up to five page buttons are always shown as-is; longer ranges
//! collapse to the first page, a window around the current page, and
//! the last page, with ellipses marking the gaps.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Longest run of page buttons shown without collapsing.
const MAX_VISIBLE: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number.
    Page(u64),
    /// The page currently shown.
    Current(u64),
    Ellipsis,
}

fn slot_for(page: u64, current: u64) -> PageSlot {
    if page == current {
        PageSlot::Current(page)
    } else {
        PageSlot::Page(page)
    }
}

/// The row of page slots for `current` out of `pages` total.
pub fn page_slots(current: u64, pages: u64) -> Vec<PageSlot> {
    let mut slots = Vec::new();
    if pages <= MAX_VISIBLE {
        for page in 1..=pages {
            slots.push(slot_for(page, current));
        }
        return slots;
    }

    slots.push(slot_for(1, current));
    if current > 3 {
        slots.push(PageSlot::Ellipsis);
    }

    let low = current.saturating_sub(1).max(2);
    let high = (current + 1).min(pages - 1);
    for page in low..=high {
        slots.push(slot_for(page, current));
    }

    if current + 2 < pages {
        slots.push(PageSlot::Ellipsis);
    }
    slots.push(slot_for(pages, current));
    slots
}

/// Numbered pagination with previous/next steps. Hidden entirely when
/// there is a single page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u64>,
    #[prop(into)] pages: Signal<u64>,
    on_page: Callback<u64>,
) -> impl IntoView {
    view! {
        <Show when={move || pages.get() > 1}>
            <nav class="pagination">
                <button
                    class="pagination__step"
                    disabled=move || page.get() <= 1
                    on:click=move |_| {
                        let current = page.get();
                        if current > 1 {
                            on_page.run(current - 1);
                        }
                    }
                >
                    "<"
                </button>
                {move || {
                    page_slots(page.get(), pages.get())
                        .into_iter()
                        .map(|slot| match slot {
                            PageSlot::Current(n) => {
                                view! {
                                    <button class="pagination__page pagination__page--current" disabled=true>
                                        {n.to_string()}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageSlot::Page(n) => {
                                view! {
                                    <button class="pagination__page" on:click=move |_| on_page.run(n)>
                                        {n.to_string()}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageSlot::Ellipsis => {
                                view! { <span class="pagination__ellipsis">"..."</span> }.into_any()
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__step"
                    disabled=move || page.get() >= pages.get()
                    on:click=move |_| {
                        let current = page.get();
                        if current < pages.get() {
                            on_page.run(current + 1);
                        }
                    }
                >
                    ">"
                </button>
            </nav>
        </Show>
    }
}
