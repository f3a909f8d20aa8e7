//! The fixed set of languages the portal can display.
//!
//! The catalog is closed at build time: a language that is not listed here
//! cannot be selected, so invalid selections are unrepresentable.

// ── Language catalog ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English, // default fallback, first picker entry
    Hindi,
    Malayalam,
    Telugu,
    Tamil,
    Kannada,
    Marathi,
    Bengali,
}

impl Language {
    /// Every supported language, in picker order. English is first and is the
    /// fallback language for missing translations.
    pub const ALL: &'static [Language] = &[
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Telugu,
        Language::Tamil,
        Language::Kannada,
        Language::Marathi,
        Language::Bengali,
    ];

    /// Short locale tag, also the value persisted to disk.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Malayalam => "ml",
            Language::Telugu => "te",
            Language::Tamil => "ta",
            Language::Kannada => "kn",
            Language::Marathi => "mr",
            Language::Bengali => "bn",
        }
    }

    /// English name of the language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Malayalam => "Malayalam",
            Language::Telugu => "Telugu",
            Language::Tamil => "Tamil",
            Language::Kannada => "Kannada",
            Language::Marathi => "Marathi",
            Language::Bengali => "Bengali",
        }
    }

    /// Name of the language in its own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Malayalam => "മലയാളം",
            Language::Telugu => "తెలుగు",
            Language::Tamil => "தமிழ்",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Marathi => "मराठी",
            Language::Bengali => "বাংলা",
        }
    }

    /// Decorative flag glyph shown next to the name in the picker.
    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            _ => "🇮🇳",
        }
    }

    /// Strict catalog lookup by locale tag. Unknown codes return `None`;
    /// the startup protocol uses this to reject stale persisted values.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.native_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_round_trips_every_language() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn from_code_unknown_returns_none() {
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn codes_are_unique() {
        for a in Language::ALL {
            for b in Language::ALL {
                if a != b {
                    assert_ne!(a.code(), b.code());
                }
            }
        }
    }

    #[test]
    fn english_is_default_and_first() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::ALL[0], Language::English);
    }

    #[test]
    fn native_names_are_populated() {
        for lang in Language::ALL {
            assert!(!lang.native_name().is_empty());
            assert!(!lang.display_name().is_empty());
            assert!(!lang.flag().is_empty());
        }
    }
}
