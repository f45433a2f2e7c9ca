//! Savings goal cache. Same shape as the tag cache.

#[cfg(test)]
#[path = "goals_test.rs"]
mod goals_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::config;
use crate::net;
use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::types::Goal;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalsState {
    pub items: Vec<Goal>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub for_user: Option<String>,
}

impl GoalsState {
    pub fn needs_fetch(&self, user_id: &str, now: DateTime<Utc>) -> bool {
        if self.loading {
            return false;
        }
        if self.for_user.as_deref() != Some(user_id) {
            return true;
        }
        match self.fetched_at {
            None => true,
            Some(at) => (now - at).num_seconds() >= config::STALE_AFTER_SECS,
        }
    }

    pub fn begin(&mut self, user_id: &str) {
        if self.for_user.as_deref() != Some(user_id) {
            self.items.clear();
            self.fetched_at = None;
            self.for_user = Some(user_id.to_owned());
        }
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, items: Vec<Goal>, now: DateTime<Utc>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.fetched_at = Some(now);
    }

    pub fn fail(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_owned());
    }

    pub fn invalidate(&mut self) {
        self.fetched_at = None;
    }

    pub fn append(&mut self, goal: Goal) {
        self.items.push(goal);
    }

    pub fn find(&self, id: &str) -> Option<&Goal> {
        self.items.iter().find(|g| g.id == id)
    }
}

/// Fetch the user's goals unless the cached copy is still fresh.
pub async fn ensure_fresh(
    api: &Api,
    cache: RwSignal<GoalsState>,
    user_id: &str,
    abort: Option<&AbortSignal>,
) {
    if !cache.with_untracked(|g| g.needs_fetch(user_id, Utc::now())) {
        return;
    }
    cache.update(|g| g.begin(user_id));

    match net::goals::list(api, user_id, abort).await {
        Ok(items) => {
            log::debug!("fetched {} goals", items.len());
            cache.update(|g| g.finish(items, Utc::now()));
        }
        Err(err) if err.is_abort() => {
            cache.update(|g| g.loading = false);
        }
        Err(err) => {
            log::warn!("goal fetch failed: {err}");
            cache.update(|g| g.fail(&err.to_string()));
        }
    }
}
