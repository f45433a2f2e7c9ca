//! Summary endpoints.
//!
//! The short summary carries the running income/expense/saving totals
//! for the month as strings; the monthly summary carries the month's
//! transactions plus numeric totals for the breakdown table.

use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::{MonthlySummary, ShortSummary, ShortSummaryRequest};

pub async fn short(
    api: &Api,
    user_id: &str,
    abort: Option<&AbortSignal>,
) -> Result<ShortSummary, ApiError> {
    let request = ShortSummaryRequest {
        user_id: user_id.to_owned(),
    };
    api.post("/transaction/summary/short", &request, abort).await
}

pub async fn monthly(
    api: &Api,
    user_id: &str,
    month: u32,
    year: i32,
    abort: Option<&AbortSignal>,
) -> Result<MonthlySummary, ApiError> {
    api.get(&format!("/transaction/summary/{user_id}/{month}/{year}"), abort)
        .await
}
