//! Savings goal endpoints.

use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::{Goal, NewGoal};

pub async fn list(
    api: &Api,
    user_id: &str,
    abort: Option<&AbortSignal>,
) -> Result<Vec<Goal>, ApiError> {
    api.get(&format!("/goals/list/{user_id}"), abort).await
}

pub async fn create(api: &Api, goal: &NewGoal) -> Result<Goal, ApiError> {
    api.post("/goals", goal, None).await
}
