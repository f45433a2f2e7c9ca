use leptos::prelude::*;

use crate::net::types::ShortSummary;
use crate::state::ui::UiState;
use crate::util::money;

/// The three headline cards for the current month.
///
/// Amounts render blurred and sharpen on hover; that part is pure CSS
/// on `summary-card__amount`.
#[component]
pub fn SummaryCards(#[prop(into)] summary: Signal<Option<ShortSummary>>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let cards = move || {
        let currency = ui.with(|u| u.currency.clone());
        let totals = summary.with(|s| s.clone().unwrap_or_default());
        [
            ("Income", totals.income_amount(), "summary-card--income"),
            ("Expense", totals.expense_amount(), "summary-card--expense"),
            ("Saving", totals.saving_amount(), "summary-card--saving"),
        ]
        .map(|(label, amount, modifier)| (label, money::format_amount(amount, &currency), modifier))
    };

    view! {
        <div class="summary-cards">
            {move || {
                cards()
                    .into_iter()
                    .map(|(label, amount, modifier)| {
                        view! {
                            <div class=format!("summary-card {modifier}")>
                                <span class="summary-card__label">{label}</span>
                                <span class="summary-card__amount">{amount}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
