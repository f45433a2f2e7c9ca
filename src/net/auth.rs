//! Authentication endpoints.

use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, User};

pub async fn login(api: &Api, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    api.post("/auth/login", &request, None).await
}

pub async fn register(api: &Api, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    api.post("/auth/register", request, None).await
}

/// Fetch the profile behind the current bearer token.
pub async fn me(api: &Api, abort: Option<&AbortSignal>) -> Result<User, ApiError> {
    api.get("/auth/me", abort).await
}

/// Tell the server to drop the session. Callers treat this as
/// fire-and-forget; the local session is cleared regardless.
pub async fn logout(api: &Api) -> Result<(), ApiError> {
    api.post::<_, serde_json::Value>("/auth/logout", &serde_json::json!({}), None)
        .await
        .map(|_| ())
}
