//! Page components, one per route.

pub mod dashboard;
pub mod goals;
pub mod login;
pub mod register;
pub mod settings;
pub mod transactions;
