//! The resource caches, bundled for context.
//!
//! Pages do not fetch directly; they call the `ensure_fresh` function
//! of each resource, which consults the cache and skips the network
//! while the cached copy is fresh. Mutations call the `reload_*`
//! methods here, which mark the cache stale and nudge the reload
//! ticks that page effects subscribe to.

use leptos::prelude::*;

use crate::state::goals::GoalsState;
use crate::state::summary::SummaryState;
use crate::state::tags::TagsState;
use crate::state::transactions::TransactionsState;

/// Every resource cache, as one `Copy` bundle of signals.
#[derive(Clone, Copy)]
pub struct Caches {
    pub tags: RwSignal<TagsState>,
    pub goals: RwSignal<GoalsState>,
    pub transactions: RwSignal<TransactionsState>,
    pub summary: RwSignal<SummaryState>,
    tags_tick: RwSignal<u32>,
    goals_tick: RwSignal<u32>,
    transactions_tick: RwSignal<u32>,
    summary_tick: RwSignal<u32>,
}

impl Caches {
    pub fn new() -> Self {
        Self {
            tags: RwSignal::new(TagsState::default()),
            goals: RwSignal::new(GoalsState::default()),
            transactions: RwSignal::new(TransactionsState::default()),
            summary: RwSignal::new(SummaryState::default()),
            tags_tick: RwSignal::new(0),
            goals_tick: RwSignal::new(0),
            transactions_tick: RwSignal::new(0),
            summary_tick: RwSignal::new(0),
        }
    }

    // Reload ticks. Page effects read these so a mutation anywhere in
    // the app reruns the fetch effect of any mounted page.

    pub fn tags_tick(&self) -> u32 {
        self.tags_tick.get()
    }

    pub fn goals_tick(&self) -> u32 {
        self.goals_tick.get()
    }

    pub fn transactions_tick(&self) -> u32 {
        self.transactions_tick.get()
    }

    pub fn summary_tick(&self) -> u32 {
        self.summary_tick.get()
    }

    /// Mark the tag cache stale and rerun subscribed effects.
    pub fn reload_tags(&self) {
        log::debug!("invalidating tag cache");
        self.tags.update(TagsState::invalidate);
        self.tags_tick.update(|n| *n += 1);
    }

    pub fn reload_goals(&self) {
        log::debug!("invalidating goal cache");
        self.goals.update(GoalsState::invalidate);
        self.goals_tick.update(|n| *n += 1);
    }

    pub fn reload_transactions(&self) {
        log::debug!("invalidating transaction cache");
        self.transactions.update(TransactionsState::invalidate);
        self.transactions_tick.update(|n| *n += 1);
    }

    pub fn reload_summaries(&self) {
        log::debug!("invalidating summary cache");
        self.summary.update(SummaryState::invalidate);
        self.summary_tick.update(|n| *n += 1);
    }

    /// Drop every cached resource. Called on sign-out so nothing of
    /// one user's data survives into the next session.
    pub fn clear_all(&self) {
        self.tags.set(TagsState::default());
        self.goals.set(GoalsState::default());
        self.transactions.set(TransactionsState::default());
        self.summary.set(SummaryState::default());
    }
}

impl Default for Caches {
    fn default() -> Self {
        Self::new()
    }
}
