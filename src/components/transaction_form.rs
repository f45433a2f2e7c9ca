//! New-transaction dialog: draft struct, validation, submit flow.
//!
//! Validation runs entirely on the client and a draft that fails it
//! never reaches the network. A transaction funds exactly one of a tag
//! or a goal; the pair is rejected both ways (none set, both set).

#[cfg(test)]
#[path = "transaction_form_test.rs"]
mod transaction_form_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use thiserror::Error;

use crate::components::modal::Modal;
use crate::config;
use crate::net;
use crate::net::client::{Api, ApiContext};
use crate::net::types::{NewTransaction, TransactionType};
use crate::state::caches::Caches;
use crate::state::session::{SessionContext, SessionHandle};
use crate::state::toasts::{self, ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::util::dates;

/// Longest accepted description, in characters rather than bytes.
pub const MAX_DESCRIPTION_CHARS: usize = 250;

/// Why a draft cannot be submitted.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TransactionFormError {
    #[error("amount must be a number")]
    UnparsableAmount,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("pick a currency")]
    MissingCurrency,
    #[error("a transaction can fund a tag or a goal, not both")]
    TagAndGoal,
    #[error("pick a tag or a goal")]
    MissingTagOrGoal,
    #[error("description is limited to 250 characters")]
    DescriptionTooLong,
    #[error("date cannot be in the future")]
    FutureDate,
    #[error("enter a valid date")]
    InvalidDate,
}

/// What the dialog edits before anything is typed against the wire.
///
/// Text fields stay `String` so partial input (an empty amount, a
/// half-typed date) is representable; [`TransactionDraft::validate`]
/// is the only place the strings become numbers and dates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionDraft {
    pub amount: String,
    pub kind: TransactionType,
    pub currency: String,
    pub tag_id: Option<String>,
    pub goal_id: Option<String>,
    pub description: String,
    /// `YYYY-MM-DD`, as a date input produces.
    pub date: String,
}

impl TransactionDraft {
    pub fn new(currency: &str) -> Self {
        Self {
            amount: String::new(),
            kind: TransactionType::default(),
            currency: currency.to_owned(),
            tag_id: None,
            goal_id: None,
            description: String::new(),
            date: dates::today_input_value(),
        }
    }

    /// Check every rule and produce the wire payload.
    ///
    /// `today` is passed in rather than read from the clock so the
    /// future-date rule is deterministic under test.
    pub fn validate(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<NewTransaction, TransactionFormError> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| TransactionFormError::UnparsableAmount)?;
        if amount <= 0.0 {
            return Err(TransactionFormError::NonPositiveAmount);
        }
        if self.currency.trim().is_empty() {
            return Err(TransactionFormError::MissingCurrency);
        }
        match (&self.tag_id, &self.goal_id) {
            (Some(_), Some(_)) => return Err(TransactionFormError::TagAndGoal),
            (None, None) => return Err(TransactionFormError::MissingTagOrGoal),
            _ => {}
        }
        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(TransactionFormError::DescriptionTooLong);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| TransactionFormError::InvalidDate)?;
        if date > today {
            return Err(TransactionFormError::FutureDate);
        }
        let date = date
            .and_hms_opt(0, 0, 0)
            .map(|at_midnight| at_midnight.and_utc())
            .ok_or(TransactionFormError::InvalidDate)?;

        let description = self.description.trim();
        Ok(NewTransaction {
            user_id: user_id.to_owned(),
            amount,
            kind: self.kind,
            currency: self.currency.clone(),
            tag_id: self.tag_id.clone(),
            goal_id: self.goal_id.clone(),
            description: (!description.is_empty()).then(|| description.to_owned()),
            date,
        })
    }
}

/// Dialog for recording a new transaction.
#[component]
pub fn TransactionForm(on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = expect_context::<SessionContext>();
    let caches = expect_context::<Caches>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(TransactionDraft::new(
        &ui.with_untracked(|u| u.currency.clone()),
    ));
    let error = RwSignal::new(None::<TransactionFormError>);
    let saving = RwSignal::new(false);

    let tags = caches.tags;
    let goals = caches.goals;

    let submit = Callback::new(move |_: ()| {
        if saving.get_untracked() {
            return;
        }
        let Some(user) = session.with_value(SessionHandle::user) else {
            return;
        };
        match draft.with_untracked(|d| d.validate(&user.id, dates::today())) {
            Err(err) => error.set(Some(err)),
            Ok(new_transaction) => {
                error.set(None);
                saving.set(true);
                let api = api.with_value(Api::clone);
                leptos::task::spawn_local(async move {
                    match net::transactions::create(&api, &new_transaction).await {
                        Ok(created) => {
                            let funds_goal = created.goal_id.is_some();
                            caches.transactions.update(|t| t.append_new(created));
                            if funds_goal {
                                caches.reload_goals();
                            }
                            caches.reload_summaries();
                            saving.set(false);
                            toasts::show(toasts, ToastKind::Success, "Transaction recorded");
                            on_close.run(());
                        }
                        Err(err) => {
                            log::warn!("transaction create failed: {err}");
                            saving.set(false);
                            toasts::show(toasts, ToastKind::Error, &err.to_string());
                        }
                    }
                });
            }
        }
    });

    view! {
        <Modal title="New transaction" on_close=on_close>
            <label class="dialog__label">
                "Amount"
                <input
                    class="dialog__input"
                    type="number"
                    step="0.01"
                    min="0"
                    prop:value=move || draft.with(|d| d.amount.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.amount = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <div class="dialog__row">
                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        prop:value=move || draft.with(|d| d.kind.as_wire().to_owned())
                        on:change=move |ev| {
                            if let Some(kind) = TransactionType::parse(&event_target_value(&ev)) {
                                draft.update(|d| d.kind = kind);
                            }
                        }
                    >
                        {TransactionType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! { <option value=kind.as_wire()>{kind.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Currency"
                    <select
                        class="dialog__input"
                        prop:value=move || draft.with(|d| d.currency.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.currency = value);
                        }
                    >
                        {config::CURRENCIES
                            .iter()
                            .copied()
                            .map(|code| view! { <option value=code>{code}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
            <div class="dialog__row">
                <label class="dialog__label">
                    "Tag"
                    <select
                        class="dialog__input"
                        prop:value=move || {
                            draft.with(|d| d.tag_id.clone().unwrap_or_default())
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                d.tag_id = (!value.is_empty()).then_some(value);
                            });
                        }
                    >
                        <option value="">"None"</option>
                        {move || {
                            tags.with(|t| {
                                t.items
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <option value=tag.id.clone()>{tag.name.clone()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Goal"
                    <select
                        class="dialog__input"
                        prop:value=move || {
                            draft.with(|d| d.goal_id.clone().unwrap_or_default())
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                d.goal_id = (!value.is_empty()).then_some(value);
                            });
                        }
                    >
                        <option value="">"None"</option>
                        {move || {
                            goals.with(|g| {
                                g.items
                                    .iter()
                                    .map(|goal| {
                                        view! {
                                            <option value=goal.id.clone()>{goal.name.clone()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </select>
                </label>
            </div>
            <label class="dialog__label">
                "Date"
                <input
                    class="dialog__input"
                    type="date"
                    prop:value=move || draft.with(|d| d.date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.date = value);
                    }
                />
            </label>
            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input"
                    rows="3"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                />
            </label>
            {move || {
                error
                    .get()
                    .map(|err| view! { <p class="dialog__error">{err.to_string()}</p> })
            }}
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || saving.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </Modal>
    }
}
