//! Tag endpoints.

use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::{NewTag, Tag};

pub async fn list(api: &Api, abort: Option<&AbortSignal>) -> Result<Vec<Tag>, ApiError> {
    api.get("/tag/list", abort).await
}

pub async fn create(api: &Api, tag: &NewTag) -> Result<Tag, ApiError> {
    api.post("/tag/create", tag, None).await
}

pub async fn update(api: &Api, id: &str, tag: &NewTag) -> Result<Tag, ApiError> {
    api.put(&format!("/tag/{id}"), tag, None).await
}

pub async fn remove(api: &Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/tag/{id}"), None).await
}
