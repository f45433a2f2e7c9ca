//! # fintrack
//!
//! Leptos + WASM personal finance tracker. A thin client over a REST
//! backend: users sign in, record income/expense/saving transactions,
//! organize them with tags and savings goals, and review monthly
//! summaries as charts and tables.
//!
//! This crate contains pages, components, application state, the typed
//! API client with its token-refresh logic, and the session storage
//! layer. All browser-only code is gated behind the `csr` feature so
//! the pure logic builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
