//! Three-digit groups: digit split, group-name form, and rendering.
//!
//! A group is one base-1000 chunk of the absolute value. Level 0 is the
//! ones group, level 1 thousands, level 2 millions and so on.
//!
//! # Form selection
//!
//! | Digits (H T U)            | Form      | Russian example |
//! |---------------------------|-----------|-----------------|
//! | `0 0 0`                   | `Omitted` | (nothing)       |
//! | `H 0 0`                   | `Many`    | двести тысяч    |
//! | `T U` in 11..=14          | `Many`    | двенадцать тысяч |
//! | `U = 1`                   | `One`     | двадцать одна тысяча |
//! | `U` in 2..=4              | `Few`     | три тысячи      |
//! | anything else             | `Many`    | пятнадцать тысяч |

use crate::tables::LanguageTables;

/// Grammatical form of a group name, chosen from the group's digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupForm {
    /// Empty group; no name is written.
    Omitted,
    /// Singular (миллион).
    One,
    /// Plural after 2-4 (миллиона).
    Few,
    /// Plural after 0, 5-9 and 11-14 (миллионов).
    Many,
}

impl GroupForm {
    /// Column of this form in a group-name row.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Omitted => 0,
            Self::One => 1,
            Self::Few => 2,
            Self::Many => 3,
        }
    }

    /// Select the form for a group with the given digits.
    #[must_use]
    pub const fn select(digits: GroupDigits) -> Self {
        let GroupDigits {
            hundreds,
            tens,
            units,
        } = digits;
        if hundreds == 0 && tens == 0 && units == 0 {
            return Self::Omitted;
        }
        if tens == 0 && units == 0 {
            return Self::Many;
        }
        let last_two = tens * 10 + units;
        if last_two > 10 && last_two < 15 {
            return Self::Many;
        }
        match units {
            1 => Self::One,
            2..=4 => Self::Few,
            _ => Self::Many,
        }
    }
}

/// Hundreds, tens and units digits of a group value below 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupDigits {
    pub hundreds: u8,
    pub tens: u8,
    pub units: u8,
}

impl GroupDigits {
    /// Split a group value. Only the lowest three decimal digits are used.
    #[must_use]
    pub const fn split(value: u16) -> Self {
        let value = value % 1000;
        Self {
            hundreds: (value / 100) as u8,
            tens: (value / 10 % 10) as u8,
            units: (value % 10) as u8,
        }
    }

    /// Whether every digit is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.hundreds == 0 && self.tens == 0 && self.units == 0
    }
}

/// Append the words of one group to `words`.
///
/// An all-zero group appends nothing, not even its group name. `level`
/// must not exceed [`crate::tables::MAX_GROUP_LEVEL`].
pub(crate) fn push_group_words(
    digits: GroupDigits,
    level: usize,
    tables: &LanguageTables,
    words: &mut Vec<&'static str>,
) {
    if digits.is_zero() {
        return;
    }
    let GroupDigits {
        hundreds,
        tens,
        units,
    } = digits;

    if hundreds > 0 {
        words.push(tables.hundreds[usize::from(hundreds - 1)]);
        if (tens > 0 || units > 0)
            && let Some(joiner) = tables.hundreds_joiner
        {
            words.push(joiner);
        }
    }

    if tens == 1 && units > 0 {
        words.push(tables.teens[usize::from(units - 1)]);
    } else if tens > 0 {
        words.push(tables.tens[usize::from(tens - 1)]);
        if units > 0 {
            words.push(tables.unit(units, level));
        }
    } else if units > 0 {
        words.push(tables.unit(units, level));
    }

    if level > 0 {
        let name = tables.group_name(level, GroupForm::select(digits));
        if !name.is_empty() {
            words.push(name);
        }
    }
}
