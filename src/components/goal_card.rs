use leptos::prelude::*;

use crate::net::types::Goal;
use crate::util::{dates, money};

/// One savings goal: radial progress ring, amounts, deadline.
#[component]
pub fn GoalCard(goal: Goal) -> impl IntoView {
    let percent = goal.progress_percent();
    // conic-gradient takes the filled share as degrees out of 360.
    let degrees = f64::from(percent) * 3.6;
    let ring_style = format!(
        "background: conic-gradient(var(--ring-fill) {degrees}deg, var(--ring-rest) 0deg)"
    );
    let current = money::format_amount(goal.current_amount, &goal.currency);
    let target = money::format_amount(goal.target_amount, &goal.currency);
    let deadline = goal.deadline.as_ref().map(dates::format_mdy);

    view! {
        <div class="goal-card">
            <div class="goal-card__ring" style=ring_style>
                <span class="goal-card__percent">{format!("{percent}%")}</span>
            </div>
            <div class="goal-card__body">
                <h3 class="goal-card__name">{goal.name}</h3>
                <p class="goal-card__amounts">{format!("{current} of {target}")}</p>
                {deadline.map(|date| view! { <p class="goal-card__deadline">{format!("by {date}")}</p> })}
            </div>
        </div>
    }
}
