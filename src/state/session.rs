//! Session lifecycle: restore, login, register, logout, forced expiry.
//!
//! DESIGN
//! ======
//! [`SessionState`] is a tagged union rather than a bag of optional
//! fields. `Unknown` exists only between page load and the first
//! [`SessionHandle::restore`] call, so the route guard can wait
//! instead of bouncing a signed-in user to the login page while the
//! stored session is still being inspected.
//!
//! Auth responses vary: some carry a `user` object, some only a token.
//! [`session_from_auth`] is the single normalizing step. The server's
//! user wins when present; otherwise the user is reconstructed from
//! the token claims; a response with neither is rejected outright.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net;
use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, RegisterRequest, User};
use crate::state::caches::Caches;
use crate::state::claims::Claims;
use crate::state::store::TokenStore;

/// Where the user stands with the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Startup state, before the stored session has been inspected.
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Session),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }
}

/// Normalize an auth response into a session.
///
/// # Errors
///
/// Returns a decode error when the response carries neither a user
/// object nor a token whose claims identify one.
pub fn session_from_auth(auth: &AuthResponse) -> Result<Session, ApiError> {
    let user = match &auth.user {
        Some(user) => user.clone(),
        None => Claims::decode(&auth.access_token)
            .map(Claims::into_user)
            .map_err(|e| ApiError::Decode(format!("auth response has no user: {e}")))?,
    };

    Ok(Session {
        user,
        token: auth.access_token.clone(),
    })
}

/// How the handle travels through context: a thread-local slot, since
/// it holds `Rc` state.
pub type SessionContext = StoredValue<SessionHandle, LocalStorage>;

/// Owner of the session lifecycle, provided once via context.
///
/// Cheap to clone; clones share the signals, the API client, and the
/// token store.
#[derive(Clone)]
pub struct SessionHandle {
    state: RwSignal<SessionState>,
    pending: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    api: Api,
    store: TokenStore,
    caches: Caches,
}

impl SessionHandle {
    pub fn new(api: Api, store: TokenStore, caches: Caches) -> Self {
        Self {
            state: RwSignal::new(SessionState::Unknown),
            pending: RwSignal::new(false),
            error: RwSignal::new(None),
            api,
            store,
            caches,
        }
    }

    /// The session signal, for reactive consumers like the route
    /// guard and the top bar.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Whether a login or register call is in flight.
    pub fn pending(&self) -> RwSignal<bool> {
        self.pending
    }

    /// The last auth failure, shown inline on the login and register
    /// forms.
    pub fn error(&self) -> RwSignal<Option<String>> {
        self.error
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn user(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(SessionState::is_authenticated)
    }

    /// Rebuild the session from `localStorage`, resolving `Unknown`
    /// one way or the other. Called once at startup.
    pub fn restore(&self) {
        if self.store.is_authenticated() {
            if let (Some(token), Some(user)) = (self.store.token(), self.store.cached_user()) {
                log::info!("restored session for {}", user.id);
                self.state
                    .set(SessionState::Authenticated(Session { user, token }));
                return;
            }

            // A usable token whose claims identify nobody (opaque
            // token, no stored user blob): ask the server who this is.
            // The state stays `Unknown` until the answer lands.
            #[cfg(feature = "csr")]
            if let Some(token) = self.store.token() {
                self.restore_from_server(token);
                return;
            }
        }

        // Expired or unusable leftovers are dropped wholesale.
        self.store.clear();
        self.state.set(SessionState::Anonymous);
    }

    #[cfg(feature = "csr")]
    fn restore_from_server(&self, token: String) {
        let handle = self.clone();
        leptos::task::spawn_local(async move {
            match net::auth::me(handle.api(), None).await {
                Ok(user) => {
                    log::info!("restored session for {}", user.id);
                    handle.store.set_session(&token, None, Some(&user));
                    handle
                        .state
                        .set(SessionState::Authenticated(Session { user, token }));
                }
                Err(err) => {
                    log::warn!("session restore failed: {err}");
                    handle.store.clear();
                    handle.state.set(SessionState::Anonymous);
                }
            }
        });
    }

    pub fn login(&self, email: String, password: String) {
        let handle = self.clone();
        self.pending.set(true);
        self.error.set(None);
        leptos::task::spawn_local(async move {
            let result = net::auth::login(handle.api(), &email, &password).await;
            handle.finish_auth(result);
        });
    }

    pub fn register(&self, request: RegisterRequest) {
        let handle = self.clone();
        self.pending.set(true);
        self.error.set(None);
        leptos::task::spawn_local(async move {
            let result = net::auth::register(handle.api(), &request).await;
            handle.finish_auth(result);
        });
    }

    /// Continuation shared by login and register: persist the session
    /// on success, surface the failure otherwise.
    fn finish_auth(&self, result: Result<AuthResponse, ApiError>) {
        self.pending.set(false);
        let outcome = result.and_then(|auth| {
            let session = session_from_auth(&auth)?;
            self.store.set_session(
                &auth.access_token,
                auth.refresh_token.as_deref(),
                Some(&session.user),
            );
            Ok(session)
        });

        match outcome {
            Ok(session) => {
                log::info!("signed in as {}", session.user.id);
                self.error.set(None);
                self.state.set(SessionState::Authenticated(session));
            }
            Err(err) => {
                log::warn!("authentication failed: {err}");
                self.error.set(Some(err.to_string()));
            }
        }
    }

    /// Sign out locally and tell the server, fire-and-forget.
    pub fn logout(&self) {
        #[cfg(feature = "csr")]
        {
            let api = self.api.clone();
            leptos::task::spawn_local(async move {
                let _ = net::auth::logout(&api).await;
            });
        }
        self.finish_sign_out();
        log::info!("signed out");
    }

    /// Forced sign-out after the refresh cycle gave up on the
    /// credential. No server call; the credential is already dead.
    pub fn expire(&self) {
        self.finish_sign_out();
        log::warn!("session expired, signing out");
    }

    /// Keep the in-memory session's token in step with a background
    /// refresh.
    pub fn sync_token(&self, token: String) {
        self.state.update(|state| {
            if let SessionState::Authenticated(session) = state {
                session.token = token;
            }
        });
    }

    fn finish_sign_out(&self) {
        self.store.clear();
        self.caches.clear_all();
        self.pending.set(false);
        self.error.set(None);
        self.state.set(SessionState::Anonymous);
    }
}
