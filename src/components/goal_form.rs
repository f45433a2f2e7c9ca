//! New-goal dialog: draft struct, validation, submit flow.

#[cfg(test)]
#[path = "goal_form_test.rs"]
mod goal_form_test;

use chrono::NaiveDate;
use leptos::prelude::*;
use thiserror::Error;

use crate::components::modal::Modal;
use crate::config;
use crate::net;
use crate::net::client::{Api, ApiContext};
use crate::net::types::NewGoal;
use crate::state::caches::Caches;
use crate::state::toasts::{self, ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::util::dates;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GoalFormError {
    #[error("name is required")]
    EmptyName,
    #[error("target must be a number")]
    UnparsableTarget,
    #[error("target must be greater than zero")]
    NonPositiveTarget,
    #[error("pick a currency")]
    MissingCurrency,
    #[error("deadline cannot be in the past")]
    PastDeadline,
    #[error("enter a valid deadline")]
    InvalidDeadline,
}

/// What the dialog edits before anything is typed against the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: String,
    pub currency: String,
    /// `YYYY-MM-DD`, as a date input produces.
    pub deadline: String,
}

impl GoalDraft {
    pub fn new(currency: &str) -> Self {
        Self {
            name: String::new(),
            target_amount: String::new(),
            currency: currency.to_owned(),
            deadline: String::new(),
        }
    }

    /// Check every rule and produce the wire payload.
    ///
    /// A deadline of `today` is accepted; only days already gone are
    /// rejected.
    pub fn validate(&self, today: NaiveDate) -> Result<NewGoal, GoalFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(GoalFormError::EmptyName);
        }
        let target_amount: f64 = self
            .target_amount
            .trim()
            .parse()
            .map_err(|_| GoalFormError::UnparsableTarget)?;
        if target_amount <= 0.0 {
            return Err(GoalFormError::NonPositiveTarget);
        }
        if self.currency.trim().is_empty() {
            return Err(GoalFormError::MissingCurrency);
        }

        let deadline = NaiveDate::parse_from_str(self.deadline.trim(), "%Y-%m-%d")
            .map_err(|_| GoalFormError::InvalidDeadline)?;
        if deadline < today {
            return Err(GoalFormError::PastDeadline);
        }
        let deadline = deadline
            .and_hms_opt(0, 0, 0)
            .map(|at_midnight| at_midnight.and_utc())
            .ok_or(GoalFormError::InvalidDeadline)?;

        Ok(NewGoal {
            name: name.to_owned(),
            target_amount,
            currency: self.currency.clone(),
            deadline,
        })
    }
}

/// Dialog for creating a savings goal.
#[component]
pub fn GoalForm(on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let caches = expect_context::<Caches>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(GoalDraft::new(&ui.with_untracked(|u| u.currency.clone())));
    let error = RwSignal::new(None::<GoalFormError>);
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |_: ()| {
        if saving.get_untracked() {
            return;
        }
        match draft.with_untracked(|d| d.validate(dates::today())) {
            Err(err) => error.set(Some(err)),
            Ok(new_goal) => {
                error.set(None);
                saving.set(true);
                let api = api.with_value(Api::clone);
                leptos::task::spawn_local(async move {
                    match net::goals::create(&api, &new_goal).await {
                        Ok(goal) => {
                            caches.goals.update(|g| g.append(goal));
                            saving.set(false);
                            toasts::show(toasts, ToastKind::Success, "Goal created");
                            on_close.run(());
                        }
                        Err(err) => {
                            log::warn!("goal create failed: {err}");
                            saving.set(false);
                            toasts::show(toasts, ToastKind::Error, &err.to_string());
                        }
                    }
                });
            }
        }
    });

    view! {
        <Modal title="New goal" on_close=on_close>
            <label class="dialog__label">
                "Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.name = value);
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
                    "Target amount"
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || draft.with(|d| d.target_amount.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.target_amount = value);
                        }
                    />
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
            <label class="dialog__label">
                "Deadline"
                <input
                    class="dialog__input"
                    type="date"
                    prop:value=move || draft.with(|d| d.deadline.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.deadline = value);
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
