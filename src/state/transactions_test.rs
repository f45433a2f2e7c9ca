use chrono::{Duration, TimeZone, Utc};

use super::*;

fn transaction(id: &str, kind: TransactionType) -> Transaction {
    Transaction {
        id: id.to_owned(),
        user_id: "user-1".to_owned(),
        amount: 10.0,
        kind,
        currency: "USD".to_owned(),
        tag_id: Some("t1".to_owned()),
        goal_id: None,
        description: None,
        date: Utc.with_ymd_and_hms(2024, 5, 10, 0, 0, 0).unwrap(),
    }
}

fn page_of(transactions: Vec<Transaction>, total: u64) -> TransactionPage {
    TransactionPage {
        transactions,
        total,
        has_more: false,
    }
}

// ============================================================================
// Page math
// ============================================================================

#[test]
fn fifty_seven_items_make_three_pages_of_twenty_five() {
    assert_eq!(page_count(57, 25), 3);
}

#[test]
fn page_three_skips_fifty() {
    assert_eq!(skip_for_page(3, 25), 50);
}

#[test]
fn page_count_edge_cases() {
    assert_eq!(page_count(0, 25), 0);
    assert_eq!(page_count(25, 25), 1);
    assert_eq!(page_count(26, 25), 2);
    assert_eq!(page_count(10, 0), 0);
}

#[test]
fn skip_never_underflows() {
    assert_eq!(skip_for_page(1, 25), 0);
    assert_eq!(skip_for_page(0, 25), 0);
}

// ============================================================================
// Cache keying
// ============================================================================

#[test]
fn changing_page_needs_a_fetch() {
    let now = Utc::now();
    let mut state = TransactionsState::default();
    state.begin("user-1", 1, None);
    state.finish(page_of(vec![], 0), now);

    assert!(!state.needs_fetch("user-1", 1, None, now));
    assert!(state.needs_fetch("user-1", 2, None, now));
}

#[test]
fn changing_filter_needs_a_fetch() {
    let now = Utc::now();
    let mut state = TransactionsState::default();
    state.begin("user-1", 1, None);
    state.finish(page_of(vec![], 0), now);

    assert!(state.needs_fetch("user-1", 1, Some(TransactionType::Income), now));
}

#[test]
fn stale_page_needs_a_fetch() {
    let now = Utc::now();
    let mut state = TransactionsState::default();
    state.begin("user-1", 1, None);
    state.finish(page_of(vec![], 0), now);

    let later = now + Duration::seconds(crate::config::STALE_AFTER_SECS);
    assert!(state.needs_fetch("user-1", 1, None, later));
}

#[test]
fn key_change_drops_the_displayed_items() {
    let mut state = TransactionsState::default();
    state.begin("user-1", 1, None);
    state.finish(page_of(vec![transaction("tx1", TransactionType::Expense)], 1), Utc::now());

    state.begin("user-1", 2, None);
    assert!(state.items.is_empty());
    assert_eq!(state.page, 2);
}

// ============================================================================
// Optimistic append
// ============================================================================

#[test]
fn new_transaction_lands_on_top_of_the_first_page() {
    let mut state = TransactionsState::default();
    state.begin("user-1", 1, None);
    state.finish(page_of(vec![transaction("tx1", TransactionType::Expense)], 1), Utc::now());

    state.append_new(transaction("tx2", TransactionType::Income));
    assert_eq!(state.items.first().map(|t| t.id.as_str()), Some("tx2"));
    assert_eq!(state.total, 2);
}

#[test]
fn append_respects_an_active_type_filter() {
    let mut state = TransactionsState::default();
    state.begin("user-1", 1, Some(TransactionType::Income));
    state.finish(page_of(vec![], 0), Utc::now());

    state.append_new(transaction("tx1", TransactionType::Expense));
    assert!(state.items.is_empty());
    assert_eq!(state.total, 1);
}

#[test]
fn append_on_a_later_page_only_bumps_the_total() {
    let mut state = TransactionsState::default();
    state.begin("user-1", 3, None);
    state.finish(page_of(vec![transaction("tx1", TransactionType::Expense)], 51), Utc::now());

    state.append_new(transaction("tx2", TransactionType::Expense));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.total, 52);
}

#[test]
fn page_count_follows_the_total() {
    let mut state = TransactionsState::default();
    state.begin("user-1", 1, None);
    state.finish(page_of(vec![], 57), Utc::now());
    assert_eq!(state.page_count(), 3);
}
