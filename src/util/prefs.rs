//! Persisted display preferences.
//!
//! Dark mode reads `localStorage` first and falls back to the system
//! `prefers-color-scheme` query; the preferred currency falls back to
//! the first offered code. Writes are best-effort: storage failures
//! (private browsing, full quota) are silently ignored.

use crate::config;

/// Read the dark mode preference.
///
/// Returns `true` if the user previously enabled dark mode, or if the
/// system prefers dark and no preference is stored.
pub fn read_dark_mode() -> bool {
    #[cfg(feature = "csr")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(config::DARK_MODE_KEY) {
                return value == "true";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

pub fn save_dark_mode(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(
                    config::DARK_MODE_KEY,
                    if enabled { "true" } else { "false" },
                );
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply_dark_mode(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark-mode");
                } else {
                    let _ = class_list.remove_1("dark-mode");
                }
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// The preferred currency code, constrained to the offered list.
pub fn read_currency() -> String {
    match stored_currency() {
        Some(code) if config::CURRENCIES.contains(&code.as_str()) => code,
        _ => config::CURRENCIES[0].to_owned(),
    }
}

pub fn save_currency(currency: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(config::CURRENCY_KEY, currency);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = currency;
    }
}

fn stored_currency() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(config::CURRENCY_KEY) {
                return Some(value);
            }
        }
        None
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
