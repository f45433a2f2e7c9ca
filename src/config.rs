//! Build-time configuration and client-wide constants.
//!
//! The API base URL is resolved at compile time so a deployment can
//! point the client at a different backend without code changes:
//! `FINTRACK_API_URL=https://api.example.com trunk build`. The default
//! `/api` relies on the dev server proxying to the backend.

/// Base URL prefix for all REST calls.
pub const API_BASE: &str = match option_env!("FINTRACK_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// localStorage key holding the access token.
pub const TOKEN_KEY: &str = "fintrack_token";

/// localStorage key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "fintrack_refresh_token";

/// localStorage key holding the cached user blob (JSON).
pub const USER_KEY: &str = "fintrack_user";

/// localStorage key for the dark mode preference.
pub const DARK_MODE_KEY: &str = "fintrack_dark";

/// localStorage key for the preferred display currency.
pub const CURRENCY_KEY: &str = "fintrack_currency";

/// Transactions fetched per page.
pub const PAGE_SIZE: u64 = 25;

/// Cached resource lists older than this are refetched.
pub const STALE_AFTER_SECS: i64 = 10 * 60;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

/// Currencies offered in the register and settings forms.
pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "PLN"];
