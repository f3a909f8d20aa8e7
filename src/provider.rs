//! The active language selection and the translate entry point.
//!
//! One `Translator` is constructed at application start and passed by
//! reference to whatever renders text. All operations are synchronous and
//! infallible; a lookup that misses everywhere shows the key verbatim.

use crate::catalog;
use crate::language::Language;
use crate::prefs::{PreferenceStore, PREFERRED_LANGUAGE_KEY};

type Subscriber = Box<dyn Fn(Language) + Send>;

pub struct Translator {
    current: Language,
    store: Box<dyn PreferenceStore + Send>,
    subscribers: Vec<Subscriber>,
}

impl Translator {
    /// Build a translator over `store`, restoring the persisted language
    /// selection. A missing or stale persisted code (one no longer in the
    /// catalog) falls back to the default language.
    pub fn new(store: Box<dyn PreferenceStore + Send>) -> Self {
        let current = store
            .get(PREFERRED_LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        tracing::debug!("translator ready, language = {}", current.code());
        Self {
            current,
            store,
            subscribers: Vec::new(),
        }
    }

    /// Resolve `key` in the active language, falling back to English and
    /// finally to the key itself. Total over all inputs, no side effects.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        catalog::lookup(self.current, key)
            .or_else(|| catalog::lookup(Language::English, key))
            .unwrap_or(key)
    }

    /// Switch the active language, persist the choice, and notify
    /// subscribers. Takes effect immediately for subsequent translate calls.
    pub fn set_language(&mut self, language: Language) {
        self.current = language;
        self.store.set(PREFERRED_LANGUAGE_KEY, language.code());
        for subscriber in &self.subscribers {
            subscriber(language);
        }
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Register a callback invoked on every `set_language`, so UI layers can
    /// re-render without this crate knowing about them.
    pub fn subscribe(&mut self, f: impl Fn(Language) + Send + 'static) {
        self.subscribers.push(Box::new(f));
    }

    /// The full language catalog, for building a picker.
    pub fn languages(&self) -> &'static [Language] {
        Language::ALL
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys;
    use crate::prefs::{FilePreferences, MemoryPreferences};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fresh() -> Translator {
        Translator::new(Box::new(MemoryPreferences::new()))
    }

    #[test]
    fn starts_in_english_without_persisted_value() {
        assert_eq!(fresh().current_language(), Language::English);
    }

    #[test]
    fn translate_active_language_wins() {
        let mut t = fresh();
        t.set_language(Language::Hindi);
        assert_eq!(t.translate(keys::NAV_HOME), "होम");
    }

    #[test]
    fn translate_falls_back_to_english_for_partial_tables() {
        let mut t = fresh();
        t.set_language(Language::Telugu);
        // The Telugu table never translated the footer.
        assert_eq!(t.translate(keys::FOOTER_CONTACT), "Contact");
        // But keys it does define resolve natively.
        assert_eq!(t.translate(keys::NAV_HOME), "హోమ్");
    }

    #[test]
    fn translate_unknown_key_returns_key_verbatim() {
        let mut t = fresh();
        assert_eq!(t.translate("no.such.key"), "no.such.key");
        t.set_language(Language::Bengali);
        assert_eq!(t.translate("no.such.key"), "no.such.key");
        assert_eq!(t.translate(""), "");
    }

    #[test]
    fn set_language_write_read_consistency() {
        let mut t = fresh();
        for lang in Language::ALL {
            t.set_language(*lang);
            assert_eq!(t.current_language(), *lang);
        }
    }

    #[test]
    fn set_language_is_idempotent() {
        let mut t = fresh();
        t.set_language(Language::Marathi);
        let first = t.translate(keys::NAV_HOME).to_string();
        t.set_language(Language::Marathi);
        assert_eq!(t.current_language(), Language::Marathi);
        assert_eq!(t.translate(keys::NAV_HOME), first);
    }

    #[test]
    fn selection_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        {
            let mut t = Translator::new(Box::new(FilePreferences::open_at(&path)));
            t.set_language(Language::Tamil);
        }
        // Fresh store over the same file, as after an app restart.
        let t = Translator::new(Box::new(FilePreferences::open_at(&path)));
        assert_eq!(t.current_language(), Language::Tamil);
    }

    #[test]
    fn stale_persisted_code_falls_back_to_default() {
        let mut store = MemoryPreferences::new();
        store.set(PREFERRED_LANGUAGE_KEY, "xx");
        let t = Translator::new(Box::new(store));
        assert_eq!(t.current_language(), Language::English);
    }

    #[test]
    fn subscribers_observe_every_switch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let mut t = fresh();
        t.subscribe(move |lang| {
            assert_ne!(lang, Language::English);
            seen.fetch_add(1, Ordering::SeqCst);
        });
        t.set_language(Language::Kannada);
        t.set_language(Language::Hindi);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn languages_exposes_full_catalog() {
        let t = fresh();
        assert_eq!(t.languages(), Language::ALL);
        assert_eq!(t.languages()[0], Language::English);
    }
}
