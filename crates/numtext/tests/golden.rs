//! Golden spellings for both languages.

use numtext::{Converter, Language, SignStyle, int_to_text};
use pretty_assertions::assert_eq;

fn check(language: Language, cases: &[(i64, &str)]) {
    for &(value, expected) in cases {
        assert_eq!(
            int_to_text(value, language).unwrap(),
            expected,
            "{language} {value}"
        );
    }
}

#[test]
fn english_golden() {
    check(
        Language::English,
        &[
            (0, "zero"),
            (7, "seven"),
            (10, "ten"),
            (11, "eleven"),
            (19, "nineteen"),
            (20, "twenty"),
            (21, "twenty one"),
            (99, "ninety nine"),
            (100, "one hundred"),
            (110, "one hundred and ten"),
            (115, "one hundred and fifteen"),
            (1_000, "one thousand"),
            (1_001, "one thousand one"),
            (12_345, "twelve thousand three hundred and forty five"),
            (1_000_000, "one million"),
            (2_500_000, "two million five hundred thousand"),
            (1_000_000_000, "one billion"),
            (-100, "minus one hundred"),
        ],
    );
}

#[test]
fn russian_golden() {
    check(
        Language::Russian,
        &[
            (0, "ноль"),
            (1, "один"),
            (2, "два"),
            (12, "двенадцать"),
            (15, "пятнадцать"),
            (21, "двадцать один"),
            (100, "сто"),
            (200, "двести"),
            (1_000, "одна тысяча"),
            (2_000, "две тысячи"),
            (5_000, "пять тысяч"),
            (22_000, "двадцать две тысячи"),
            (111_000, "сто одиннадцать тысяч"),
            (1_000_000, "один миллион"),
            (2_000_000, "два миллиона"),
            (5_000_000, "пять миллионов"),
            (21_000_000, "двадцать один миллион"),
            (1_000_000_000, "один миллиард"),
            (3_000_000_000, "три миллиарда"),
            (
                1_234_567,
                "один миллион двести тридцать четыре тысячи пятьсот шестьдесят семь",
            ),
            (
                10_071_111,
                "десять миллионов семьдесят одна тысяча сто одиннадцать",
            ),
            (-15, "минус пятнадцать"),
        ],
    );
}

#[test]
fn russian_form_boundaries() {
    check(
        Language::Russian,
        &[
            (10_000, "десять тысяч"),
            (11_000, "одиннадцать тысяч"),
            (14_000, "четырнадцать тысяч"),
            (15_000, "пятнадцать тысяч"),
            (20_000, "двадцать тысяч"),
            (21_000, "двадцать одна тысяча"),
            (24_000, "двадцать четыре тысячи"),
            (25_000, "двадцать пять тысяч"),
        ],
    );
}

#[test]
fn english_group_name_does_not_inflect() {
    check(
        Language::English,
        &[
            (2_000_000, "two million"),
            (5_000_000, "five million"),
            (11_000, "eleven thousand"),
            (21_000, "twenty one thousand"),
        ],
    );
}

#[test]
fn stateful_session() {
    let mut converter = Converter::default().with_sign_style(SignStyle::Always);
    assert_eq!(converter.int_to_text(3, None).unwrap(), "plus three");
    assert_eq!(converter.int_to_text(3, Some("ru")).unwrap(), "плюс три");
    assert_eq!(converter.int_to_text(-3, None).unwrap(), "минус три");
    assert_eq!(converter.int_to_text(0, Some("xx")).unwrap(), "zero");
    assert_eq!(converter.language(), Language::English);
}
