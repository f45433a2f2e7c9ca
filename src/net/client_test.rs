use super::*;
use crate::net::types::User;
use crate::state::store::TokenStore;

// ============================================================================
// Refresh decision table
// ============================================================================

#[test]
fn first_401_from_data_endpoint_triggers_refresh() {
    assert!(should_refresh(401, "/transaction/filter", 0));
    assert!(should_refresh(401, "/tag/list", 0));
}

#[test]
fn second_401_does_not_trigger_refresh() {
    assert!(!should_refresh(401, "/transaction/filter", 1));
}

#[test]
fn auth_endpoints_never_trigger_refresh() {
    assert!(!should_refresh(401, "/auth/login", 0));
    assert!(!should_refresh(401, "/auth/register", 0));
    assert!(!should_refresh(401, "/auth/refresh", 0));
}

#[test]
fn non_401_statuses_do_not_trigger_refresh() {
    assert!(!should_refresh(200, "/transaction/filter", 0));
    assert!(!should_refresh(403, "/transaction/filter", 0));
    assert!(!should_refresh(500, "/transaction/filter", 0));
}

#[test]
fn auth_endpoint_detection_is_exact() {
    assert!(is_auth_endpoint("/auth/login"));
    assert!(is_auth_endpoint("/auth/refresh"));
    assert!(!is_auth_endpoint("/auth/me"));
    assert!(!is_auth_endpoint("/transaction/filter"));
}

// ============================================================================
// URL joining
// ============================================================================

#[test]
fn join_handles_slashes_on_both_sides() {
    assert_eq!(join_url("/api", "/tag/list"), "/api/tag/list");
    assert_eq!(join_url("/api/", "/tag/list"), "/api/tag/list");
    assert_eq!(join_url("/api", "tag/list"), "/api/tag/list");
    assert_eq!(
        join_url("http://localhost:3000/api", "/auth/login"),
        "http://localhost:3000/api/auth/login"
    );
}

#[test]
fn constructor_trims_trailing_slash_from_base() {
    let api = Api::with_base("http://localhost:3000/api/", TokenStore::in_memory());
    assert_eq!(api.base(), "http://localhost:3000/api");
}

// ============================================================================
// Status classification
// ============================================================================

#[test]
fn only_2xx_counts_as_success() {
    assert!(is_success(200));
    assert!(is_success(201));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(401));
    assert!(!is_success(500));
}

// ============================================================================
// Body decoding
// ============================================================================

#[test]
fn empty_body_decodes_as_empty_object() {
    let user: Result<serde_json::Value, _> = decode_json("");
    assert_eq!(user.expect("empty body should decode"), serde_json::json!({}));

    let blank: Result<serde_json::Value, _> = decode_json("   \n");
    assert!(blank.is_ok());
}

#[test]
fn malformed_body_is_a_decode_error() {
    let result: Result<User, ApiError> = decode_json("not json");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// ============================================================================
// Refresh without a stored refresh token
// ============================================================================

#[test]
fn refresh_without_token_expires_the_session() {
    let api = Api::with_base("/api", TokenStore::in_memory());
    let result = futures::executor::block_on(api.perform_refresh());
    assert_eq!(result, Err(ApiError::SessionExpired));
}

#[test]
fn expired_session_notification_reaches_the_callback() {
    use std::cell::Cell;
    use std::rc::Rc;

    let api = Api::with_base("/api", TokenStore::in_memory());
    let fired = Rc::new(Cell::new(false));
    let observed = fired.clone();
    api.set_on_session_expired(move || observed.set(true));

    api.notify_session_expired();
    assert!(fired.get());
}
