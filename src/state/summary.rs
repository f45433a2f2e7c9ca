//! Dashboard summary cache.
//!
//! One cache entry covers both summary endpoints for a given user and
//! month: the short month-to-date totals feeding the cards and chart,
//! and the monthly breakdown feeding the table. Both are fetched
//! together since the dashboard always shows both.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::config;
use crate::net;
use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::types::{MonthlySummary, ShortSummary};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryState {
    pub short: Option<ShortSummary>,
    pub monthly: Option<MonthlySummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
    /// `(user_id, month, year)` the cached summaries belong to.
    pub for_key: Option<(String, u32, i32)>,
}

impl SummaryState {
    fn matches_key(&self, user_id: &str, month: u32, year: i32) -> bool {
        match &self.for_key {
            Some((user, m, y)) => user == user_id && *m == month && *y == year,
            None => false,
        }
    }

    pub fn needs_fetch(&self, user_id: &str, month: u32, year: i32, now: DateTime<Utc>) -> bool {
        if self.loading {
            return false;
        }
        if !self.matches_key(user_id, month, year) {
            return true;
        }
        match self.fetched_at {
            None => true,
            Some(at) => (now - at).num_seconds() >= config::STALE_AFTER_SECS,
        }
    }

    pub fn begin(&mut self, user_id: &str, month: u32, year: i32) {
        if !self.matches_key(user_id, month, year) {
            self.short = None;
            self.monthly = None;
            self.fetched_at = None;
            self.for_key = Some((user_id.to_owned(), month, year));
        }
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, short: ShortSummary, monthly: MonthlySummary, now: DateTime<Utc>) {
        self.short = Some(short);
        self.monthly = Some(monthly);
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
}

/// Fetch both summaries for the month unless the cache is fresh.
pub async fn ensure_fresh(
    api: &Api,
    cache: RwSignal<SummaryState>,
    user_id: &str,
    month: u32,
    year: i32,
    abort: Option<&AbortSignal>,
) {
    if !cache.with_untracked(|s| s.needs_fetch(user_id, month, year, Utc::now())) {
        return;
    }
    cache.update(|s| s.begin(user_id, month, year));

    let (short, monthly) = futures::join!(
        net::summary::short(api, user_id, abort),
        net::summary::monthly(api, user_id, month, year, abort),
    );

    match (short, monthly) {
        (Ok(short), Ok(monthly)) => {
            log::debug!("fetched summaries for {month}/{year}");
            cache.update(|s| s.finish(short, monthly, Utc::now()));
        }
        (Err(err), _) | (_, Err(err)) if err.is_abort() => {
            cache.update(|s| s.loading = false);
        }
        (Err(err), _) | (_, Err(err)) => {
            log::warn!("summary fetch failed: {err}");
            cache.update(|s| s.fail(&err.to_string()));
        }
    }
}
