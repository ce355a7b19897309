//! Per-language word tables.
//!
//! Each supported language has one static [`LanguageTables`] record. All
//! lengths are fixed by the array types, so a language cannot be added
//! with a missing digit or group form.

use crate::group::GroupForm;

/// Highest group level with a name (10^18, quintillion).
pub const MAX_GROUP_LEVEL: usize = 6;

/// Grammatical gender used to pick a digit word inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
}

/// Masculine and feminine spellings of one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitWord {
    pub masculine: &'static str,
    pub feminine: &'static str,
}

impl DigitWord {
    const fn same(word: &'static str) -> Self {
        Self {
            masculine: word,
            feminine: word,
        }
    }

    const fn gendered(masculine: &'static str, feminine: &'static str) -> Self {
        Self {
            masculine,
            feminine,
        }
    }

    /// Spelling for the given gender.
    #[must_use]
    pub const fn get(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Masculine => self.masculine,
            Gender::Feminine => self.feminine,
        }
    }
}

/// All words one language needs to spell an integer.
#[derive(Debug)]
pub struct LanguageTables {
    /// Digits 0-9.
    pub digits: [DigitWord; 10],
    /// 11-19.
    pub teens: [&'static str; 9],
    /// 10, 20, ..., 90.
    pub tens: [&'static str; 9],
    /// 100, 200, ..., 900.
    pub hundreds: [&'static str; 9],
    /// Inserted between the hundreds word and a non-zero remainder.
    pub hundreds_joiner: Option<&'static str>,
    /// Group names for levels 1..=6, each indexed by [`GroupForm`].
    pub group_names: [[&'static str; 4]; MAX_GROUP_LEVEL],
    /// Gender of the digits inside each group level 0..=6.
    pub group_genders: [Gender; MAX_GROUP_LEVEL + 1],
    pub minus: &'static str,
    pub plus: &'static str,
}

impl LanguageTables {
    /// Word for zero.
    #[must_use]
    pub const fn zero(&self) -> &'static str {
        self.digits[0].masculine
    }

    /// Units word for digit `d` (1-9) inside group `level`.
    #[must_use]
    pub fn unit(&self, d: u8, level: usize) -> &'static str {
        self.digits[usize::from(d)].get(self.group_genders[level])
    }

    /// Group name for `level` (1..=6) in `form`.
    ///
    /// Returns `""` for level 0 and for [`GroupForm::Omitted`].
    #[must_use]
    pub fn group_name(&self, level: usize, form: GroupForm) -> &'static str {
        match level {
            0 => "",
            _ => self.group_names[level - 1][form.index()],
        }
    }
}

const M: Gender = Gender::Masculine;
const F: Gender = Gender::Feminine;

pub static ENGLISH: LanguageTables = LanguageTables {
    digits: [
        DigitWord::same("zero"),
        DigitWord::same("one"),
        DigitWord::same("two"),
        DigitWord::same("three"),
        DigitWord::same("four"),
        DigitWord::same("five"),
        DigitWord::same("six"),
        DigitWord::same("seven"),
        DigitWord::same("eight"),
        DigitWord::same("nine"),
    ],
    teens: [
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ],
    tens: [
        "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    hundreds: [
        "one hundred",
        "two hundred",
        "three hundred",
        "four hundred",
        "five hundred",
        "six hundred",
        "seven hundred",
        "eight hundred",
        "nine hundred",
    ],
    hundreds_joiner: Some("and"),
    group_names: [
        ["", "thousand", "thousand", "thousand"],
        ["", "million", "million", "million"],
        ["", "billion", "billion", "billion"],
        ["", "trillion", "trillion", "trillion"],
        ["", "quadrillion", "quadrillion", "quadrillion"],
        ["", "quintillion", "quintillion", "quintillion"],
    ],
    group_genders: [M; MAX_GROUP_LEVEL + 1],
    minus: "minus",
    plus: "plus",
};

pub static RUSSIAN: LanguageTables = LanguageTables {
    digits: [
        DigitWord::same("ноль"),
        DigitWord::gendered("один", "одна"),
        DigitWord::gendered("два", "две"),
        DigitWord::same("три"),
        DigitWord::same("четыре"),
        DigitWord::same("пять"),
        DigitWord::same("шесть"),
        DigitWord::same("семь"),
        DigitWord::same("восемь"),
        DigitWord::same("девять"),
    ],
    teens: [
        "одиннадцать",
        "двенадцать",
        "тринадцать",
        "четырнадцать",
        "пятнадцать",
        "шестнадцать",
        "семнадцать",
        "восемнадцать",
        "девятнадцать",
    ],
    tens: [
        "десять",
        "двадцать",
        "тридцать",
        "сорок",
        "пятьдесят",
        "шестьдесят",
        "семьдесят",
        "восемьдесят",
        "девяносто",
    ],
    hundreds: [
        "сто",
        "двести",
        "триста",
        "четыреста",
        "пятьсот",
        "шестьсот",
        "семьсот",
        "восемьсот",
        "девятьсот",
    ],
    hundreds_joiner: None,
    group_names: [
        ["", "тысяча", "тысячи", "тысяч"],
        ["", "миллион", "миллиона", "миллионов"],
        ["", "миллиард", "миллиарда", "миллиардов"],
        ["", "триллион", "триллиона", "триллионов"],
        ["", "квадриллион", "квадриллиона", "квадриллионов"],
        ["", "квинтиллион", "квинтиллиона", "квинтиллионов"],
    ],
    // Thousands (тысяча) are feminine: "одна тысяча", "две тысячи".
    group_genders: [M, F, M, M, M, M, M],
    minus: "минус",
    plus: "плюс",
};
