//! Tag cache.
//!
//! Tags are fetched once per user and reused across pages; chips in
//! the transaction table, the tag picker in the transaction form, and
//! the management list in settings all read the same copy. The cache
//! refetches when it has nothing for the current user, when the copy
//! is older than the staleness window, or after a mutation marks it
//! stale.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::config;
use crate::net;
use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::types::Tag;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagsState {
    pub items: Vec<Tag>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub for_user: Option<String>,
}

impl TagsState {
    /// Whether a fetch should go out for `user_id` now. Never while
    /// one is already in flight.
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

    /// Enter the loading state. Switching users drops the previous
    /// user's items immediately instead of displaying them.
    pub fn begin(&mut self, user_id: &str) {
        if self.for_user.as_deref() != Some(user_id) {
            self.items.clear();
            self.fetched_at = None;
            self.for_user = Some(user_id.to_owned());
        }
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, items: Vec<Tag>, now: DateTime<Utc>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.fetched_at = Some(now);
    }

    pub fn fail(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_owned());
    }

    /// Mark the cache stale so the next `ensure_fresh` refetches.
    pub fn invalidate(&mut self) {
        self.fetched_at = None;
    }

    pub fn append(&mut self, tag: Tag) {
        self.items.push(tag);
    }

    pub fn replace(&mut self, tag: Tag) {
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == tag.id) {
            *existing = tag;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }

    pub fn find(&self, id: &str) -> Option<&Tag> {
        self.items.iter().find(|t| t.id == id)
    }
}

/// Fetch the user's tags unless the cached copy is still fresh.
pub async fn ensure_fresh(
    api: &Api,
    cache: RwSignal<TagsState>,
    user_id: &str,
    abort: Option<&AbortSignal>,
) {
    if !cache.with_untracked(|t| t.needs_fetch(user_id, Utc::now())) {
        return;
    }
    cache.update(|t| t.begin(user_id));

    match net::tags::list(api, abort).await {
        Ok(items) => {
            log::debug!("fetched {} tags", items.len());
            cache.update(|t| t.finish(items, Utc::now()));
        }
        Err(err) if err.is_abort() => {
            // The page went away; leave the cache as it was.
            cache.update(|t| t.loading = false);
        }
        Err(err) => {
            log::warn!("tag fetch failed: {err}");
            cache.update(|t| t.fail(&err.to_string()));
        }
    }
}
