use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::state::caches::Caches;
use crate::util::{dates, money};

/// Transaction rows in the order given, with tag and goal labels
/// resolved from the caches.
#[component]
pub fn TransactionTable(#[prop(into)] transactions: Signal<Vec<Transaction>>) -> impl IntoView {
    let caches = expect_context::<Caches>();
    let tags = caches.tags;
    let goals = caches.goals;

    view! {
        <table class="transaction-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Type"</th>
                    <th>"Description"</th>
                    <th>"Tag / goal"</th>
                    <th class="transaction-table__amount">"Amount"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = transactions.get();
                    if rows.is_empty() {
                        return view! {
                            <tr>
                                <td class="transaction-table__empty" colspan="5">
                                    "No transactions yet."
                                </td>
                            </tr>
                        }
                            .into_any();
                    }
                    rows.into_iter()
                        .map(|transaction| {
                            let badge = format!("badge badge--{}", transaction.kind.slug());
                            let label = transaction.kind.label();
                            let date = dates::format_mdy(&transaction.date);
                            let amount = money::format_amount(
                                transaction.amount,
                                &transaction.currency,
                            );
                            let description = transaction.description.clone().unwrap_or_default();
                            let chip = if let Some(tag_id) = transaction.tag_id.as_deref() {
                                match tags.with(|t| t.find(tag_id).cloned()) {
                                    Some(tag) => {
                                        view! {
                                            <span
                                                class="tag-chip"
                                                style:background-color=tag.color_bg
                                                style:color=tag.color_text
                                            >
                                                {tag.name}
                                            </span>
                                        }
                                            .into_any()
                                    }
                                    None => view! { <span class="tag-chip">"Tag"</span> }.into_any(),
                                }
                            } else if let Some(goal_id) = transaction.goal_id.as_deref() {
                                let name = goals
                                    .with(|g| g.find(goal_id).map(|goal| goal.name.clone()))
                                    .unwrap_or_else(|| "Goal".to_owned());
                                view! { <span class="goal-chip">{name}</span> }.into_any()
                            } else {
                                view! { <span></span> }.into_any()
                            };
                            view! {
                                <tr>
                                    <td>{date}</td>
                                    <td>
                                        <span class=badge>{label}</span>
                                    </td>
                                    <td class="transaction-table__description">{description}</td>
                                    <td>{chip}</td>
                                    <td class="transaction-table__amount">{amount}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
