//! Client-side state.
//!
//! DESIGN
//! ======
//! The session is the root of everything: [`session::SessionHandle`]
//! owns the login lifecycle and exposes a [`session::SessionState`]
//! signal that the router guard and every data fetch key off. Resource
//! state (tags, goals, transactions, summaries) lives in per-resource
//! cache structs inside [`caches::Caches`], each remembering what it
//! fetched, for whom, and when, so navigating back to a page within
//! the staleness window does not refetch.
//!
//! Persistence is limited to `localStorage`: the access and refresh
//! tokens, a cached user blob, and display preferences. Everything
//! else is rebuilt from the server on reload.

pub mod caches;
pub mod claims;
pub mod goals;
pub mod session;
pub mod store;
pub mod summary;
pub mod tags;
pub mod toasts;
pub mod transactions;
pub mod ui;
