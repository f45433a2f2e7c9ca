use chrono::{Duration, Utc};
use leptos::prelude::*;

use super::*;
use crate::net::client::Api;
use crate::state::store::TokenStore;

fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_owned(),
        name: name.to_owned(),
        color_bg: "#112233".to_owned(),
        color_text: "#ffffff".to_owned(),
        user_id: Some("user-1".to_owned()),
    }
}

// ============================================================================
// Staleness
// ============================================================================

#[test]
fn empty_cache_needs_fetch() {
    let state = TagsState::default();
    assert!(state.needs_fetch("user-1", Utc::now()));
}

#[test]
fn fresh_cache_does_not_need_fetch() {
    let now = Utc::now();
    let mut state = TagsState::default();
    state.begin("user-1");
    state.finish(vec![tag("t1", "food")], now);

    assert!(!state.needs_fetch("user-1", now + Duration::seconds(30)));
}

#[test]
fn cache_goes_stale_after_the_window() {
    let now = Utc::now();
    let mut state = TagsState::default();
    state.begin("user-1");
    state.finish(vec![], now);

    let later = now + Duration::seconds(crate::config::STALE_AFTER_SECS + 1);
    assert!(state.needs_fetch("user-1", later));
}

#[test]
fn different_user_always_needs_fetch() {
    let now = Utc::now();
    let mut state = TagsState::default();
    state.begin("user-1");
    state.finish(vec![tag("t1", "food")], now);

    assert!(state.needs_fetch("user-2", now));
}

#[test]
fn in_flight_fetch_suppresses_another() {
    let mut state = TagsState::default();
    state.begin("user-1");
    assert!(!state.needs_fetch("user-1", Utc::now()));
}

#[test]
fn invalidate_forces_a_refetch() {
    let now = Utc::now();
    let mut state = TagsState::default();
    state.begin("user-1");
    state.finish(vec![tag("t1", "food")], now);
    state.invalidate();

    assert!(state.needs_fetch("user-1", now));
}

// ============================================================================
// Transitions
// ============================================================================

#[test]
fn switching_users_drops_the_previous_items() {
    let mut state = TagsState::default();
    state.begin("user-1");
    state.finish(vec![tag("t1", "food")], Utc::now());

    state.begin("user-2");
    assert!(state.items.is_empty());
    assert!(state.loading);
}

#[test]
fn failure_keeps_items_and_records_the_error() {
    let mut state = TagsState::default();
    state.begin("user-1");
    state.finish(vec![tag("t1", "food")], Utc::now());

    state.begin("user-1");
    state.fail("server exploded");

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("server exploded"));
    assert!(!state.loading);
}

// ============================================================================
// Mutation helpers
// ============================================================================

#[test]
fn append_replace_remove_and_find() {
    let mut state = TagsState::default();
    state.append(tag("t1", "food"));
    state.append(tag("t2", "rent"));

    let mut renamed = tag("t2", "housing");
    renamed.color_bg = "#445566".to_owned();
    state.replace(renamed);
    assert_eq!(state.find("t2").map(|t| t.name.as_str()), Some("housing"));

    state.remove("t1");
    assert!(state.find("t1").is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn replace_of_unknown_id_is_a_no_op() {
    let mut state = TagsState::default();
    state.append(tag("t1", "food"));
    state.replace(tag("t9", "ghost"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.find("t1").map(|t| t.name.as_str()), Some("food"));
}

// ============================================================================
// ensure_fresh against an unreachable backend
// ============================================================================

#[test]
fn failed_fetch_lands_in_the_error_state() {
    let api = Api::with_base("/api", TokenStore::in_memory());
    let cache = RwSignal::new(TagsState::default());

    futures::executor::block_on(ensure_fresh(&api, cache, "user-1", None));

    cache.with_untracked(|state| {
        assert!(!state.loading);
        assert!(state.error.is_some());
        assert!(state.items.is_empty());
    });
}

#[test]
fn fresh_cache_skips_the_network_entirely() {
    let api = Api::with_base("/api", TokenStore::in_memory());
    let cache = RwSignal::new(TagsState::default());
    cache.update(|state| {
        state.begin("user-1");
        state.finish(vec![tag("t1", "food")], Utc::now());
    });

    // An unreachable backend would fail the fetch, so no error means
    // no request went out.
    futures::executor::block_on(ensure_fresh(&api, cache, "user-1", None));

    cache.with_untracked(|state| {
        assert!(state.error.is_none());
        assert_eq!(state.items.len(), 1);
    });
}
