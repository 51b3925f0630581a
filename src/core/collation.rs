//! Locale-aware string ordering for group headings.
//!
//! Mirrors the root collation browsers use for `localeCompare`. At the
//! primary level whitespace sorts first, then punctuation, symbols, digits
//! and letters. Letters compare by base letter: canonical decomposition
//! strips accents, case is ignored, and letters without a decomposition
//! (`ł`, `ø`, `ß`, ...) expand to their base spelling. Ties are broken by
//! accents, then case with lowercase first, and finally by code point so the
//! result is a total order.

use std::cmp::Ordering;
use std::iter;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| accent_keys(a).cmp(accent_keys(b)))
        .then_with(|| case_keys(a).cmp(case_keys(b)))
        .then_with(|| a.cmp(b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_numeric() {
        CharClass::Digit
    } else if "_-,;:!?.'\"()[]{}@*/\\&#%".contains(c) {
        CharClass::Punctuation
    } else {
        CharClass::Symbol
    }
}

fn primary_keys(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(expand_letter)
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

fn accent_keys(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(has_accent)
}

// Lowercase sorts before uppercase.
fn case_keys(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn has_accent(c: char) -> bool {
    iter::once(c).nfd().any(is_combining_mark) || expand_letter(c).ne(iter::once(c))
}

/// Base spelling for letters that carry a diacritic but have no canonical decomposition.
fn expand_letter(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        'ł' => ('l', None),
        'Ł' => ('L', None),
        'ø' => ('o', None),
        'Ø' => ('O', None),
        'đ' => ('d', None),
        'Đ' => ('D', None),
        'ħ' => ('h', None),
        'Ħ' => ('H', None),
        'ı' => ('i', None),
        'ß' => ('s', Some('s')),
        'ẞ' => ('S', Some('S')),
        'æ' => ('a', Some('e')),
        'Æ' => ('A', Some('E')),
        'œ' => ('o', Some('e')),
        'Œ' => ('O', Some('E')),
        other => (other, None),
    };
    iter::once(first).chain(second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        items.sort_by(|a, b| locale_compare(a, b));
        items
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(
            sorted(vec!["ramesh", "Amit", "bhola", "Zubin"]),
            vec!["Amit", "bhola", "ramesh", "Zubin"]
        );
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("ring", "Ring"), Ordering::Less);
        assert_eq!(locale_compare("Ring", "ring"), Ordering::Greater);
    }

    #[test]
    fn test_accents_fold_to_base_letter() {
        assert_eq!(sorted(vec!["Zoe", "Éclat", "Earring"]), vec!["Earring", "Éclat", "Zoe"]);
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("Ring", "Ring Set"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
    }

    #[test]
    fn test_letters_without_decomposition_fold_to_base() {
        assert_eq!(locale_compare("Łukasz", "Zubin"), Ordering::Less);
        assert_eq!(locale_compare("Łukasz", "Lukas"), Ordering::Greater);
        assert_eq!(locale_compare("Søren", "Suresh"), Ordering::Less);
        assert_eq!(locale_compare("Weiß", "Weist"), Ordering::Less);
        assert_eq!(locale_compare("Weiss", "Weiß"), Ordering::Less);
    }

    #[test]
    fn test_decomposable_accents_fold_to_base() {
        assert_eq!(locale_compare("Řehoř", "Suresh"), Ordering::Less);
        assert_eq!(locale_compare("Ąnil", "Bharat"), Ordering::Less);
        assert_eq!(locale_compare("Ěva", "Farhan"), Ordering::Less);
        assert_eq!(locale_compare("Ővári", "Pooja"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_and_digits_before_letters() {
        assert_eq!(locale_compare("~Gold", "Amit"), Ordering::Less);
        assert_eq!(locale_compare("_x", "1x"), Ordering::Less);
        assert_eq!(locale_compare("9 Ring", "Anklet"), Ordering::Less);
        assert_eq!(locale_compare(" Gold", "-Gold"), Ordering::Less);
        assert_eq!(
            sorted(vec!["Zubin", "~Gold", "22K Set", "Łukasz", "(Repair)", "amit"]),
            vec!["(Repair)", "~Gold", "22K Set", "amit", "Łukasz", "Zubin"]
        );
    }

    #[test]
    fn test_equal_only_for_identical_strings() {
        assert_eq!(locale_compare("Amit", "Amit"), Ordering::Equal);
        assert_ne!(locale_compare("AMIT", "Amit"), Ordering::Equal);
    }
}
