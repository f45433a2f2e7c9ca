//! REST API client and typed endpoint wrappers.
//!
//! DESIGN
//! ======
//! `client::Api` owns the cross-cutting request behavior (bearer
//! header, 401 refresh-and-retry, error mapping); the sibling modules
//! (`auth`, `tags`, `goals`, `transactions`, `summary`) are thin typed
//! wrappers over it, one per backend resource.

pub mod abort;
pub mod auth;
pub mod client;
pub mod error;
pub mod goals;
pub mod single_flight;
pub mod summary;
pub mod tags;
pub mod transactions;
pub mod types;
