//! Best-effort JWT payload decoding.
//!
//! The client never verifies signatures; that is the server's job. The
//! payload is decoded only to learn the subject, the expiry, and any
//! profile claims the server chose to embed, so the session can be
//! restored from a stored token without a network round trip.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use crate::net::types::User;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not valid base64")]
    Base64,
    #[error("token payload is not valid JSON: {0}")]
    Json(String),
}

/// The subset of JWT claims the client cares about.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Decode the payload segment of a JWT without verifying it.
    ///
    /// # Errors
    ///
    /// Returns a [`ClaimsError`] when the token is not shaped like a
    /// JWT or its payload does not decode.
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let mut parts = token.split('.');
        let (Some(_), Some(payload), Some(_), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ClaimsError::Malformed);
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| ClaimsError::Base64)?;
        serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))
    }

    /// Whether the `exp` claim is in the past. Tokens without an `exp`
    /// never expire from the client's point of view.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => exp <= Utc::now().timestamp(),
            None => false,
        }
    }

    /// Build a displayable user from the claims alone, for servers
    /// that omit the user object from auth responses.
    pub fn into_user(self) -> User {
        User {
            id: self.sub,
            email: self.email.unwrap_or_default(),
            name: self.name,
        }
    }
}
