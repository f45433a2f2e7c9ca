//! Display preferences: dark mode and the default currency offered in
//! forms. Persisted in `localStorage`, loaded once at startup.

use crate::config;
use crate::util::prefs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub currency: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            currency: config::CURRENCIES[0].to_owned(),
        }
    }
}

impl UiState {
    /// Preferences as persisted, falling back to the defaults.
    pub fn load() -> Self {
        Self {
            dark_mode: prefs::read_dark_mode(),
            currency: prefs::read_currency(),
        }
    }
}
