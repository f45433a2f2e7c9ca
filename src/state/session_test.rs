use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use leptos::prelude::*;

use super::*;
use crate::net::types::Tag;

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

fn make_handle() -> (SessionHandle, TokenStore, Caches) {
    let store = TokenStore::in_memory();
    let api = Api::with_base("/api", store.clone());
    let caches = Caches::new();
    let handle = SessionHandle::new(api, store.clone(), caches);
    (handle, store, caches)
}

// ============================================================================
// SessionState
// ============================================================================

#[test]
fn session_starts_unknown() {
    let state = SessionState::default();
    assert!(state.is_unknown());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
}

#[test]
fn authenticated_state_exposes_the_user() {
    let state = SessionState::Authenticated(Session {
        user: sample_user(),
        token: "tok".to_owned(),
    });
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("user-1"));
}

// ============================================================================
// Normalizing auth responses
// ============================================================================

#[test]
fn server_provided_user_wins() {
    let token = jwt_with_payload(&serde_json::json!({"sub": "claims-id"}));
    let auth = AuthResponse {
        access_token: token,
        refresh_token: None,
        user: Some(sample_user()),
        expires_in: None,
    };

    let session = session_from_auth(&auth).expect("session should normalize");
    assert_eq!(session.user.id, "user-1");
}

#[test]
fn missing_user_is_rebuilt_from_token_claims() {
    let token = jwt_with_payload(&serde_json::json!({
        "sub": "claims-id",
        "email": "claims@example.com",
    }));
    let auth = AuthResponse {
        access_token: token.clone(),
        refresh_token: None,
        user: None,
        expires_in: None,
    };

    let session = session_from_auth(&auth).expect("session should normalize");
    assert_eq!(session.user.id, "claims-id");
    assert_eq!(session.token, token);
}

#[test]
fn response_with_no_user_and_opaque_token_is_rejected() {
    let auth = AuthResponse {
        access_token: "opaque".to_owned(),
        refresh_token: None,
        user: None,
        expires_in: None,
    };
    assert!(matches!(session_from_auth(&auth), Err(ApiError::Decode(_))));
}

// ============================================================================
// Restore
// ============================================================================

#[test]
fn restore_with_empty_store_is_anonymous() {
    let (handle, _store, _caches) = make_handle();
    handle.restore();
    assert_eq!(handle.state().get_untracked(), SessionState::Anonymous);
}

#[test]
fn restore_with_valid_session_is_authenticated() {
    let (handle, store, _caches) = make_handle();
    let token = jwt_with_payload(&serde_json::json!({
        "sub": "user-1",
        "exp": Utc::now().timestamp() + 3600,
    }));
    store.set_session(&token, Some("refresh"), Some(&sample_user()));

    handle.restore();
    assert!(handle.is_authenticated());
    assert_eq!(handle.user().map(|u| u.id), Some("user-1".to_owned()));
}

#[test]
fn restore_with_expired_token_clears_the_leftovers() {
    let (handle, store, _caches) = make_handle();
    let token = jwt_with_payload(&serde_json::json!({
        "sub": "user-1",
        "exp": Utc::now().timestamp() - 3600,
    }));
    store.set_session(&token, Some("refresh"), Some(&sample_user()));

    handle.restore();
    assert_eq!(handle.state().get_untracked(), SessionState::Anonymous);
    assert_eq!(store.token(), None);
    assert_eq!(store.refresh_token(), None);
}

// ============================================================================
// Login continuation
// ============================================================================

#[test]
fn successful_auth_stores_exactly_one_token_and_matching_user() {
    let (handle, store, _caches) = make_handle();
    let token = jwt_with_payload(&serde_json::json!({
        "sub": "claims-id",
        "email": "claims@example.com",
    }));
    let auth = AuthResponse {
        access_token: token.clone(),
        refresh_token: Some("refresh-1".to_owned()),
        user: None,
        expires_in: None,
    };

    handle.finish_auth(Ok(auth));

    assert_eq!(store.token(), Some(token));
    let cached = store.cached_user().expect("user should be cached");
    assert_eq!(cached.id, "claims-id");
    assert!(handle.is_authenticated());
    assert_eq!(handle.error().get_untracked(), None);
}

#[test]
fn failed_auth_surfaces_the_error_and_stays_signed_out() {
    let (handle, store, _caches) = make_handle();
    handle.finish_auth(Err(ApiError::Status {
        status: 401,
        message: "bad credentials".to_owned(),
    }));

    assert_eq!(store.token(), None);
    assert!(!handle.is_authenticated());
    assert_eq!(
        handle.error().get_untracked().as_deref(),
        Some("bad credentials")
    );
    assert!(!handle.pending().get_untracked());
}

// ============================================================================
// Sign-out paths
// ============================================================================

#[test]
fn logout_clears_store_state_and_caches() {
    let (handle, store, caches) = make_handle();
    store.set_session("tok", Some("refresh"), Some(&sample_user()));
    handle.restore();
    caches.tags.update(|t| {
        t.append(Tag {
            id: "t1".to_owned(),
            name: "food".to_owned(),
            color_bg: "#112233".to_owned(),
            color_text: "#ffffff".to_owned(),
            user_id: Some("user-1".to_owned()),
        });
    });

    handle.logout();

    assert_eq!(store.token(), None);
    assert_eq!(handle.state().get_untracked(), SessionState::Anonymous);
    caches.tags.with_untracked(|t| assert!(t.items.is_empty()));
}

#[test]
fn expiry_forces_a_sign_out() {
    let (handle, store, _caches) = make_handle();
    store.set_session("tok", Some("refresh"), Some(&sample_user()));
    handle.restore();
    assert!(handle.is_authenticated());

    handle.expire();
    assert_eq!(handle.state().get_untracked(), SessionState::Anonymous);
    assert_eq!(store.token(), None);
}

#[test]
fn sync_token_updates_the_live_session() {
    let (handle, store, _caches) = make_handle();
    store.set_session("tok-old", None, Some(&sample_user()));
    handle.restore();

    handle.sync_token("tok-new".to_owned());
    handle.state().with_untracked(|state| match state {
        SessionState::Authenticated(session) => assert_eq!(session.token, "tok-new"),
        other => panic!("expected authenticated session, got {other:?}"),
    });
}
