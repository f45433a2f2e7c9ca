//! Paged transaction cache.
//!
//! Unlike tags and goals the transaction list is keyed by page and
//! type filter as well as by user; changing either marks the cache
//! cold so `ensure_fresh` refetches. The server does the slicing: the
//! client sends `skip`/`limit` and renders whatever page comes back.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::config;
use crate::net;
use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::types::{Transaction, TransactionFilter, TransactionPage, TransactionType};

/// Total number of pages for `total` items, `per_page` to a page.
pub fn page_count(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Items to skip so the server returns 1-based page `page`.
pub fn skip_for_page(page: u64, per_page: u64) -> u64 {
    page.saturating_sub(1) * per_page
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionsState {
    pub items: Vec<Transaction>,
    pub total: u64,
    pub has_more: bool,
    /// 1-based page the cache currently holds.
    pub page: u64,
    pub kind: Option<TransactionType>,
    pub loading: bool,
    pub error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub for_user: Option<String>,
}

impl Default for TransactionsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            has_more: false,
            page: 1,
            kind: None,
            loading: false,
            error: None,
            fetched_at: None,
            for_user: None,
        }
    }
}

impl TransactionsState {
    fn matches_key(&self, user_id: &str, page: u64, kind: Option<TransactionType>) -> bool {
        self.for_user.as_deref() == Some(user_id) && self.page == page && self.kind == kind
    }

    pub fn needs_fetch(
        &self,
        user_id: &str,
        page: u64,
        kind: Option<TransactionType>,
        now: DateTime<Utc>,
    ) -> bool {
        if self.loading {
            return false;
        }
        if !self.matches_key(user_id, page, kind) {
            return true;
        }
        match self.fetched_at {
            None => true,
            Some(at) => (now - at).num_seconds() >= config::STALE_AFTER_SECS,
        }
    }

    pub fn begin(&mut self, user_id: &str, page: u64, kind: Option<TransactionType>) {
        if !self.matches_key(user_id, page, kind) {
            self.items.clear();
            self.fetched_at = None;
            self.for_user = Some(user_id.to_owned());
            self.page = page;
            self.kind = kind;
        }
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, page: TransactionPage, now: DateTime<Utc>) {
        self.items = page.transactions;
        self.total = page.total;
        self.has_more = page.has_more;
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

    /// Slot a just-created transaction in optimistically: bump the
    /// total, and show it on top when the current view would include
    /// it (first page, matching filter).
    pub fn append_new(&mut self, transaction: Transaction) {
        self.total += 1;
        let matches_filter = self.kind.is_none_or(|k| k == transaction.kind);
        if matches_filter && self.page <= 1 {
            self.items.insert(0, transaction);
        }
    }

    pub fn page_count(&self) -> u64 {
        page_count(self.total, config::PAGE_SIZE)
    }
}

/// Fetch one page of transactions unless the cached page is fresh.
pub async fn ensure_fresh(
    api: &Api,
    cache: RwSignal<TransactionsState>,
    user_id: &str,
    page: u64,
    kind: Option<TransactionType>,
    abort: Option<&AbortSignal>,
) {
    if !cache.with_untracked(|t| t.needs_fetch(user_id, page, kind, Utc::now())) {
        return;
    }
    cache.update(|t| t.begin(user_id, page, kind));

    let filter = TransactionFilter {
        user_id: user_id.to_owned(),
        skip: skip_for_page(page, config::PAGE_SIZE),
        limit: config::PAGE_SIZE,
        kind,
        month: None,
        year: None,
    };

    match net::transactions::filter(api, &filter, abort).await {
        Ok(result) => {
            log::debug!(
                "fetched page {page} ({} of {} transactions)",
                result.transactions.len(),
                result.total
            );
            cache.update(|t| t.finish(result, Utc::now()));
        }
        Err(err) if err.is_abort() => {
            cache.update(|t| t.loading = false);
        }
        Err(err) => {
            log::warn!("transaction fetch failed: {err}");
            cache.update(|t| t.fail(&err.to_string()));
        }
    }
}
