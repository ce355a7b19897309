#![forbid(unsafe_code)]

//! Integer to words conversion for English and Russian.
//!
//! Spells an integer the way it is read aloud, with base-1000 grouping
//! (thousand, million, billion and up to quintillion), Russian gender
//! agreement (`одна тысяча`, `один миллион`) and Russian plural forms for
//! group names (`тысяча`, `тысячи`, `тысяч`).
//!
//! # Example
//!
//! ```
//! use numtext::{Language, ToWords, int_to_text};
//!
//! assert_eq!(int_to_text(21, Language::English).unwrap(), "twenty one");
//! assert_eq!(int_to_text(-2_000_000, Language::Russian).unwrap(), "минус два миллиона");
//! assert_eq!(105u16.to_words(Language::English).unwrap(), "one hundred and five");
//! ```
//!
//! # Range
//!
//! Magnitudes up to [`MAX_MAGNITUDE`] (`i64::MAX`) convert. Larger ones,
//! `i64::MIN` included, fail with [`ConvertError::OutOfRange`].
//!
//! # Features
//!
//! - `tracing`: debug events for language fallback and range failures,
//!   and a trace span per conversion.
//! - `serde`: `Serialize`/`Deserialize` for [`Language`] and [`SignStyle`].

pub mod converter;
pub mod error;
pub mod group;
pub mod language;
pub mod tables;

pub use converter::{Converter, SignStyle, ToWords, int_to_text};
pub use error::ConvertError;
pub use group::{GroupDigits, GroupForm};
pub use language::Language;
pub use tables::{Gender, LanguageTables};

/// Largest magnitude that converts: `i64::MAX`.
pub const MAX_MAGNITUDE: u64 = i64::MAX as u64;
