//! Internationalization for the SmartFarm portal.
//!
//! The portal ships a fixed catalog of eight languages with static
//! translation tables (English is complete and serves as the fallback; some
//! regional tables are partial). A [`Translator`] holds the active selection,
//! resolves keys through the active table → English → key-verbatim chain, and
//! persists the user's choice so it survives a restart.
//!
//! ```
//! use smartfarm_i18n::{catalog::keys, Language, MemoryPreferences, Translator};
//!
//! let mut i18n = Translator::new(Box::new(MemoryPreferences::new()));
//! assert_eq!(i18n.translate(keys::NAV_HOME), "Home");
//!
//! i18n.set_language(Language::Hindi);
//! assert_eq!(i18n.translate(keys::NAV_HOME), "होम");
//! ```

pub mod catalog;
mod language;
mod prefs;
mod provider;

pub use language::Language;
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore, PREFERRED_LANGUAGE_KEY};
pub use provider::Translator;
