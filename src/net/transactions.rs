//! Transaction endpoints.

use crate::net::abort::AbortSignal;
use crate::net::client::Api;
use crate::net::error::ApiError;
use crate::net::types::{NewTransaction, Transaction, TransactionFilter, TransactionPage};

pub async fn create(api: &Api, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
    api.post("/transaction", transaction, None).await
}

/// Fetch one page of the user's transactions, newest first.
pub async fn filter(
    api: &Api,
    filter: &TransactionFilter,
    abort: Option<&AbortSignal>,
) -> Result<TransactionPage, ApiError> {
    api.post("/transaction/filter", filter, abort).await
}
