//! Small shared helpers: calendar math, money formatting, and
//! persisted display preferences.

pub mod dates;
pub mod money;
pub mod prefs;
