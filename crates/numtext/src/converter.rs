//! Integer to words conversion.
//!
//! # Invariants
//!
//! 1. **Bounded input**: any value with `|value| <= MAX_MAGNITUDE` converts;
//!    anything larger fails with [`ConvertError::OutOfRange`].
//! 2. **Normalized output**: the result never has leading, trailing or
//!    repeated whitespace.
//! 3. **Sign symmetry**: for `n > 0`, `convert(-n)` is the minus word, one
//!    space, then `convert(n)`.
//! 4. **No hidden state**: [`Converter::convert`] takes `&self`; only
//!    [`Converter::set_language`] and [`Converter::int_to_text`] change the
//!    selected language, and only on the converter they are called on.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Out of range | `|value| > MAX_MAGNITUDE` (including `i64::MIN`) | `Err(OutOfRange)` |
//! | Unknown language code | Code other than `en`/`ru` | Falls back to English |

use crate::MAX_MAGNITUDE;
use crate::error::ConvertError;
use crate::group::{GroupDigits, push_group_words};
use crate::language::Language;
use crate::tables::MAX_GROUP_LEVEL;

/// How the sign of a non-zero value is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SignStyle {
    /// Only negative values get a sign word.
    #[default]
    NegativeOnly,
    /// Positive values get the plus word as well.
    Always,
}

/// Converts integers to words in one selected language.
///
/// # Example
///
/// ```
/// use numtext::{Converter, Language};
///
/// let converter = Converter::new(Language::Russian);
/// assert_eq!(
///     converter.convert(10_071_111).unwrap(),
///     "десять миллионов семьдесят одна тысяча сто одиннадцать"
/// );
///
/// let mut converter = Converter::default();
/// assert_eq!(converter.int_to_text(21, None).unwrap(), "twenty one");
/// assert_eq!(converter.int_to_text(-2, Some("RU")).unwrap(), "минус два");
/// assert_eq!(converter.language(), Language::Russian);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Converter {
    language: Language,
    sign_style: SignStyle,
}

impl Converter {
    /// Create a converter for `language` with [`SignStyle::NegativeOnly`].
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            sign_style: SignStyle::NegativeOnly,
        }
    }

    /// Set how signs are written.
    #[must_use]
    pub const fn with_sign_style(mut self, sign_style: SignStyle) -> Self {
        self.sign_style = sign_style;
        self
    }

    /// Currently selected language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Current sign style.
    #[must_use]
    pub const fn sign_style(&self) -> SignStyle {
        self.sign_style
    }

    /// Select a language by code and return it.
    ///
    /// Unknown codes select English.
    pub fn set_language(&mut self, code: &str) -> Language {
        self.language = Language::from_code(code);
        self.language
    }

    /// Convert `value`, first switching to `language` when one is given.
    ///
    /// The language switch persists for later calls.
    pub fn int_to_text(
        &mut self,
        value: impl Into<i128>,
        language: Option<&str>,
    ) -> Result<String, ConvertError> {
        if let Some(code) = language {
            self.set_language(code);
        }
        self.convert(value)
    }

    /// Convert `value` in the selected language.
    pub fn convert(&self, value: impl Into<i128>) -> Result<String, ConvertError> {
        let value = value.into();

        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!(
            "int_to_text",
            language = self.language.code(),
            value = %value
        )
        .entered();

        let magnitude = checked_magnitude(value)?;
        let tables = self.language.tables();
        if magnitude == 0 {
            return Ok(tables.zero().to_owned());
        }

        let mut groups = [GroupDigits::split(0); MAX_GROUP_LEVEL + 1];
        let mut count = 0;
        let mut rest = magnitude;
        while rest > 0 {
            groups[count] = GroupDigits::split((rest % 1000) as u16);
            rest /= 1000;
            count += 1;
        }

        let mut words = Vec::with_capacity(count * 4 + 1);
        if value < 0 {
            words.push(tables.minus);
        } else if self.sign_style == SignStyle::Always {
            words.push(tables.plus);
        }
        for level in (0..count).rev() {
            push_group_words(groups[level], level, tables, &mut words);
        }

        Ok(collapse_whitespace(&words.join(" ")))
    }
}

/// Absolute value of `value` if it is within [`MAX_MAGNITUDE`].
fn checked_magnitude(value: i128) -> Result<u64, ConvertError> {
    match u64::try_from(value.unsigned_abs()) {
        Ok(magnitude) if magnitude <= MAX_MAGNITUDE => Ok(magnitude),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::debug!(value = %value, "number out of range");
            Err(ConvertError::OutOfRange { value })
        }
    }
}

/// Collapse whitespace runs to a single space and trim both ends.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Convert `value` to words in `language`.
///
/// ```
/// use numtext::{Language, int_to_text};
///
/// assert_eq!(int_to_text(1_000_000, Language::English).unwrap(), "one million");
/// assert_eq!(int_to_text(15, Language::Russian).unwrap(), "пятнадцать");
/// ```
pub fn int_to_text(value: impl Into<i128>, language: Language) -> Result<String, ConvertError> {
    Converter::new(language).convert(value)
}

/// Words for an integer value.
pub trait ToWords {
    /// Spell `self` in `language`.
    fn to_words(&self, language: Language) -> Result<String, ConvertError>;
}

macro_rules! impl_to_words_lossless {
    ($($ty:ty),*) => {
        $(
            impl ToWords for $ty {
                fn to_words(&self, language: Language) -> Result<String, ConvertError> {
                    int_to_text(*self, language)
                }
            }
        )*
    };
}

impl_to_words_lossless!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl ToWords for isize {
    fn to_words(&self, language: Language) -> Result<String, ConvertError> {
        let value = i128::try_from(*self).map_err(|_| ConvertError::OutOfRange {
            value: if *self < 0 { i128::MIN } else { i128::MAX },
        })?;
        int_to_text(value, language)
    }
}

impl ToWords for usize {
    fn to_words(&self, language: Language) -> Result<String, ConvertError> {
        let value =
            i128::try_from(*self).map_err(|_| ConvertError::OutOfRange { value: i128::MAX })?;
        int_to_text(value, language)
    }
}
