//! Authorized HTTP client over the browser fetch API.
//!
//! DESIGN
//! ======
//! Every request attaches `Authorization: Bearer <token>` and
//! `Content-Type: application/json`. A `401` from a non-auth endpoint
//! triggers a silent token refresh and the original request is then
//! retried exactly once; a second `401` terminates the session. The
//! refresh itself is single-flight, so a burst of 401s from parallel
//! requests produces one refresh call whose outcome all of them share.
//!
//! The auth endpoints (`/auth/login`, `/auth/register`,
//! `/auth/refresh`) are exempt from the refresh cycle so a rejected
//! login can never recurse into it.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface as `ApiError::Network`, non-2xx
//! responses as `ApiError::Status` carrying the server's message when
//! the body parses as JSON, and a dead credential as
//! `ApiError::SessionExpired` after the session-expired callback has
//! run. The client never panics on bad input.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config;
use crate::net::abort::AbortSignal;
use crate::net::error::ApiError;
use crate::net::single_flight::SingleFlight;
use crate::net::types::{AuthResponse, RefreshRequest};
use crate::state::store::TokenStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

struct RawResponse {
    status: u16,
    body: String,
}

#[derive(Default)]
struct Callbacks {
    /// Runs with the new access token after a successful refresh.
    on_refreshed: Option<Rc<dyn Fn(String)>>,
    /// Runs when the credential is gone for good (refresh failed or
    /// absent). The session layer uses it to force a sign-out.
    on_session_expired: Option<Rc<dyn Fn()>>,
}

/// How the client travels through context: a thread-local slot, since
/// it holds `Rc` state.
pub type ApiContext = leptos::prelude::StoredValue<Api, leptos::prelude::LocalStorage>;

/// REST client carrying the bearer credential and the refresh logic.
///
/// Cheap to clone; clones share the token store, the single-flight
/// refresh slot, and the callback registrations.
#[derive(Clone)]
pub struct Api {
    base: String,
    store: TokenStore,
    refresh: SingleFlight,
    callbacks: Rc<RefCell<Callbacks>>,
}

impl Api {
    pub fn new(store: TokenStore) -> Self {
        Self::with_base(config::API_BASE, store)
    }

    pub fn with_base(base: &str, store: TokenStore) -> Self {
        Self {
            base: base.trim_end_matches('/').to_owned(),
            store,
            refresh: SingleFlight::new(),
            callbacks: Rc::new(RefCell::new(Callbacks::default())),
        }
    }

    pub fn set_on_refreshed(&self, callback: impl Fn(String) + 'static) {
        self.callbacks.borrow_mut().on_refreshed = Some(Rc::new(callback));
    }

    pub fn set_on_session_expired(&self, callback: impl Fn() + 'static) {
        self.callbacks.borrow_mut().on_session_expired = Some(Rc::new(callback));
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let body = self.send_with_refresh(Method::Get, path, None, abort).await?;
        decode_json(&body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        abort: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let json = encode_json(body)?;
        let text = self
            .send_with_refresh(Method::Post, path, Some(json), abort)
            .await?;
        decode_json(&text)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        abort: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let json = encode_json(body)?;
        let text = self
            .send_with_refresh(Method::Put, path, Some(json), abort)
            .await?;
        decode_json(&text)
    }

    pub async fn delete(&self, path: &str, abort: Option<&AbortSignal>) -> Result<(), ApiError> {
        self.send_with_refresh(Method::Delete, path, None, abort)
            .await
            .map(|_| ())
    }

    /// Perform the request, refreshing the token and retrying once on
    /// a 401 from a non-auth endpoint.
    async fn send_with_refresh(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        abort: Option<&AbortSignal>,
    ) -> Result<String, ApiError> {
        let mut attempt: u32 = 0;
        loop {
            let response = self.dispatch(method, path, body.as_deref(), abort).await?;

            if is_success(response.status) {
                return Ok(response.body);
            }

            if should_refresh(response.status, path, attempt) {
                attempt += 1;
                match self.refresh_session().await {
                    Ok(()) => continue,
                    Err(err) => {
                        log::warn!("token refresh failed: {err}");
                        self.notify_session_expired();
                        return Err(ApiError::SessionExpired);
                    }
                }
            }

            // A second 401 after a successful refresh means the new
            // credential is no good either.
            if response.status == 401 && !is_auth_endpoint(path) {
                self.notify_session_expired();
                return Err(ApiError::SessionExpired);
            }

            return Err(ApiError::from_response(response.status, &response.body));
        }
    }

    /// Single-flight wrapper around [`Api::perform_refresh`].
    async fn refresh_session(&self) -> Result<(), ApiError> {
        let api = self.clone();
        self.refresh
            .run(move || async move { api.perform_refresh().await })
            .await
    }

    /// Exchange the refresh token for a fresh access token and persist
    /// the result.
    async fn perform_refresh(&self) -> Result<(), ApiError> {
        let Some(refresh_token) = self.store.refresh_token() else {
            return Err(ApiError::SessionExpired);
        };

        log::info!("access token rejected, refreshing");
        let body = encode_json(&RefreshRequest { refresh_token })?;
        let response = self
            .dispatch(Method::Post, "/auth/refresh", Some(&body), None)
            .await?;
        if !is_success(response.status) {
            return Err(ApiError::from_response(response.status, &response.body));
        }

        let auth: AuthResponse = decode_json(&response.body)?;
        self.store.set_session(
            &auth.access_token,
            auth.refresh_token.as_deref(),
            auth.user.as_ref(),
        );
        log::info!("token refresh succeeded");

        let callback = self.callbacks.borrow().on_refreshed.clone();
        if let Some(callback) = callback {
            callback(auth.access_token);
        }
        Ok(())
    }

    fn notify_session_expired(&self) {
        let callback = self.callbacks.borrow().on_session_expired.clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    #[cfg(feature = "csr")]
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
        abort: Option<&AbortSignal>,
    ) -> Result<RawResponse, ApiError> {
        use gloo_net::http::Request;

        let url = join_url(&self.base, path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        builder = builder.header("Content-Type", "application/json");
        if let Some(token) = self.store.token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        builder = builder.abort_signal(abort);

        let request = match body {
            Some(json) => builder
                .body(json)
                .map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }

    #[cfg(not(feature = "csr"))]
    async fn dispatch(
        &self,
        _method: Method,
        _path: &str,
        _body: Option<&str>,
        _abort: Option<&AbortSignal>,
    ) -> Result<RawResponse, ApiError> {
        Err(ApiError::Network(
            "requests are only available in the browser".to_owned(),
        ))
    }
}

/// Endpoints that must never trigger the refresh cycle.
fn is_auth_endpoint(path: &str) -> bool {
    matches!(path, "/auth/login" | "/auth/register" | "/auth/refresh")
}

/// Whether a response status warrants a refresh-and-retry. Only the
/// first 401 from a non-auth endpoint qualifies.
fn should_refresh(status: u16, path: &str, attempt: u32) -> bool {
    status == 401 && attempt == 0 && !is_auth_endpoint(path)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

fn encode_json<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a response body, treating an empty body (204 No Content) as
/// an empty JSON object.
fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let text = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
