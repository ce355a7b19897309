//! Supported output languages and code resolution.
//!
//! # Invariants
//!
//! 1. **Resolution is total**: every code string resolves to exactly one
//!    [`Language`]. Unknown codes resolve to [`Language::English`].
//! 2. **Case-insensitive**: `"RU"`, `"Ru"` and `"ru"` are the same code.
//!    Whitespace and region subtags are not stripped (`"ru-RU"` is unknown).

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::tables::{self, LanguageTables};

/// Output language for number words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    #[cfg_attr(feature = "serde", serde(rename = "ru"))]
    Russian,
}

impl Language {
    /// All supported languages, ordered by [`Language::index`].
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    /// Resolve a language code, falling back to English for unknown codes.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "en" => Self::English,
            "ru" => Self::Russian,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(code, "unknown language code, falling back to English");
                Self::English
            }
        }
    }

    /// Two-letter code (`"en"`, `"ru"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    /// Numeric language code: 0 for English, 1 for Russian.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::English => 0,
            Self::Russian => 1,
        }
    }

    /// Word tables for this language.
    #[must_use]
    pub fn tables(self) -> &'static LanguageTables {
        match self {
            Self::English => &tables::ENGLISH,
            Self::Russian => &tables::RUSSIAN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("ru"), Language::Russian);
    }

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(Language::from_code("RU"), Language::Russian);
        assert_eq!(Language::from_code("Ru"), Language::Russian);
        assert_eq!(Language::from_code("EN"), Language::English);
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        for code in ["", "de", "ru-RU", " ru", "russian", "1"] {
            assert_eq!(Language::from_code(code), Language::English, "{code:?}");
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(usize::from(lang.index()), i);
        }
    }

    #[test]
    fn display_and_parse_agree() {
        for lang in Language::ALL {
            let parsed: Language = lang.to_string().parse().unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn tables_match_language() {
        assert_eq!(Language::English.tables().minus, "minus");
        assert_eq!(Language::Russian.tables().minus, "минус");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&Language::Russian).unwrap();
        assert_eq!(json, "\"ru\"");
        let back: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Language::English);
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn fallback_is_logged() {
        let _ = Language::from_code("xx");
        assert!(logs_contain("falling back to English"));
    }
}
