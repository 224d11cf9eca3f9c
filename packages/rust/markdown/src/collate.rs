//! Locale-style title ordering.
//!
//! Approximates the default root collation in three levels. First, base
//! letters: accents are stripped (NFD minus combining marks), letters compare
//! case-insensitively, and whitespace and punctuation sort before digits,
//! digits before letters. Second, accents (`Eclair` before `Éclair`). Third,
//! case (lower-case first). Strings that still compare equal are left to the
//! caller's stable sort.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two titles the way a reader scanning an alphabetical list expects.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = base_letters(a)
        .map(primary_weight)
        .cmp(base_letters(b).map(primary_weight));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = a
        .nfd()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .cmp(b.nfd().map(|c| c.to_lowercase().next().unwrap_or(c)));
    if secondary != Ordering::Equal {
        return secondary;
    }

    a.chars().map(case_weight).cmp(b.chars().map(case_weight))
}

/// Sort in place by `key` using [`locale_cmp`]. Stable: equal keys keep
/// their relative order.
pub fn sort_by_locale<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| locale_cmp(key(a), key(b)));
}

/// Canonical decomposition with combining marks dropped: `É` becomes `E`.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|&c| !is_combining_mark(c))
}

fn primary_weight(c: char) -> (u8, char) {
    if c.is_whitespace() {
        (0, ' ')
    } else if c.is_alphabetic() {
        (3, c.to_lowercase().next().unwrap_or(c))
    } else if c.is_numeric() {
        (2, c)
    } else {
        (1, c)
    }
}

fn case_weight(c: char) -> u8 {
    if c.is_uppercase() { 1 } else { 0 }
}
