use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

use super::*;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.sig")
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn decodes_subject_and_expiry() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "user-1",
        "email": "ada@example.com",
        "exp": 1_900_000_000,
    }));

    let claims = Claims::decode(&token).expect("token should decode");
    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.email.as_deref(), Some("ada@example.com"));
    assert_eq!(claims.exp, Some(1_900_000_000));
    assert_eq!(claims.name, None);
}

#[test]
fn tolerates_extra_claims() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "user-1",
        "iat": 1_700_000_000,
        "role": "admin",
    }));

    let claims = Claims::decode(&token).expect("token should decode");
    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.exp, None);
}

#[test]
fn rejects_tokens_without_three_parts() {
    assert_eq!(Claims::decode("abc.def"), Err(ClaimsError::Malformed));
    assert_eq!(Claims::decode(""), Err(ClaimsError::Malformed));
    assert_eq!(Claims::decode("a.b.c.d"), Err(ClaimsError::Malformed));
}

#[test]
fn rejects_payloads_that_are_not_base64() {
    let result = Claims::decode("header.!!not-base64!!.sig");
    assert_eq!(result, Err(ClaimsError::Base64));
}

#[test]
fn rejects_payloads_that_are_not_json() {
    let payload = URL_SAFE_NO_PAD.encode(b"plain text");
    let result = Claims::decode(&format!("h.{payload}.s"));
    assert!(matches!(result, Err(ClaimsError::Json(_))));
}

// ============================================================================
// Expiry
// ============================================================================

#[test]
fn future_expiry_is_not_expired() {
    let claims = Claims {
        sub: "user-1".to_owned(),
        exp: Some(Utc::now().timestamp() + 3600),
        ..Claims::default()
    };
    assert!(!claims.is_expired());
}

#[test]
fn past_expiry_is_expired() {
    let claims = Claims {
        sub: "user-1".to_owned(),
        exp: Some(Utc::now().timestamp() - 3600),
        ..Claims::default()
    };
    assert!(claims.is_expired());
}

#[test]
fn missing_expiry_never_expires() {
    let claims = Claims {
        sub: "user-1".to_owned(),
        ..Claims::default()
    };
    assert!(!claims.is_expired());
}

// ============================================================================
// Claims to user
// ============================================================================

#[test]
fn user_id_comes_from_the_subject_claim() {
    let claims = Claims {
        sub: "user-42".to_owned(),
        email: Some("grace@example.com".to_owned()),
        name: Some("Grace".to_owned()),
        exp: None,
    };

    let user = claims.into_user();
    assert_eq!(user.id, "user-42");
    assert_eq!(user.email, "grace@example.com");
    assert_eq!(user.name.as_deref(), Some("Grace"));
}

#[test]
fn missing_email_becomes_empty_string() {
    let claims = Claims {
        sub: "user-42".to_owned(),
        ..Claims::default()
    };
    assert_eq!(claims.into_user().email, "");
}
