use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

use super::*;

fn jwt_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.sig")
}

fn sample_user() -> User {
    User {
        id: "user-1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: Some("Ada".to_owned()),
    }
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[test]
fn fresh_store_has_no_session() {
    let store = TokenStore::in_memory();
    assert_eq!(store.token(), None);
    assert_eq!(store.refresh_token(), None);
    assert!(!store.is_authenticated());
    assert!(store.cached_user().is_none());
}

#[test]
fn set_session_persists_all_three_keys() {
    let store = TokenStore::in_memory();
    store.set_session("tok", Some("refresh"), Some(&sample_user()));

    assert_eq!(store.token().as_deref(), Some("tok"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh"));
    let user = store.cached_user().expect("user should be cached");
    assert_eq!(user.id, "user-1");
}

#[test]
fn omitted_refresh_and_user_keep_previous_values() {
    let store = TokenStore::in_memory();
    store.set_session("tok-1", Some("refresh-1"), Some(&sample_user()));
    store.set_session("tok-2", None, None);

    assert_eq!(store.token().as_deref(), Some("tok-2"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    assert!(store.cached_user().is_some());
}

#[test]
fn clear_removes_everything() {
    let store = TokenStore::in_memory();
    store.set_session("tok", Some("refresh"), Some(&sample_user()));
    store.clear();

    assert_eq!(store.token(), None);
    assert_eq!(store.refresh_token(), None);
    assert!(store.cached_user().is_none());
    assert!(!store.is_authenticated());
}

// ============================================================================
// Authentication checks
// ============================================================================

#[test]
fn valid_jwt_with_future_expiry_is_authenticated() {
    let store = TokenStore::in_memory();
    let token = jwt_with_payload(&serde_json::json!({
        "sub": "user-1",
        "exp": Utc::now().timestamp() + 3600,
    }));
    store.set_session(&token, None, None);
    assert!(store.is_authenticated());
}

#[test]
fn expired_jwt_is_not_authenticated() {
    let store = TokenStore::in_memory();
    let token = jwt_with_payload(&serde_json::json!({
        "sub": "user-1",
        "exp": Utc::now().timestamp() - 3600,
    }));
    store.set_session(&token, None, None);
    assert!(!store.is_authenticated());
}

#[test]
fn opaque_token_counts_by_presence() {
    let store = TokenStore::in_memory();
    store.set_session("not-a-jwt", None, None);
    assert!(store.is_authenticated());
}

// ============================================================================
// Cached user resolution
// ============================================================================

#[test]
fn stored_blob_wins_over_token_claims() {
    let store = TokenStore::in_memory();
    let token = jwt_with_payload(&serde_json::json!({
        "sub": "claims-id",
        "email": "claims@example.com",
    }));
    store.set_session(&token, None, Some(&sample_user()));

    let user = store.cached_user().expect("user should resolve");
    assert_eq!(user.id, "user-1");
}

#[test]
fn user_falls_back_to_token_claims() {
    let store = TokenStore::in_memory();
    let token = jwt_with_payload(&serde_json::json!({
        "sub": "claims-id",
        "email": "claims@example.com",
    }));
    store.set_session(&token, None, None);

    let user = store.cached_user().expect("user should resolve");
    assert_eq!(user.id, "claims-id");
    assert_eq!(user.email, "claims@example.com");
}

#[test]
fn opaque_token_without_blob_has_no_user() {
    let store = TokenStore::in_memory();
    store.set_session("not-a-jwt", None, None);
    assert!(store.cached_user().is_none());
}
