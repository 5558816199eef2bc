//! Russian-alphabet-aware string ordering
//!
//! Mirrors what a `ru` locale comparison produces for catalog region names:
//! comparison is case-insensitive at the primary level, `ё` sorts right
//! after `е`, punctuation and digits precede letters, and Latin letters
//! precede Cyrillic ones. Ties on the primary level are broken with
//! lowercase before uppercase, then by raw code points, so the result is a
//! total order.

use std::cmp::Ordering;

/// Compare two strings the way a Russian reader expects
pub fn compare_ru(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight));
    if primary != Ordering::Equal {
        return primary;
    }

    let tertiary = a
        .chars()
        .map(case_weight)
        .cmp(b.chars().map(case_weight));
    if tertiary != Ordering::Equal {
        return tertiary;
    }

    a.cmp(b)
}

const CYRILLIC_A: u32 = 'а' as u32;
const CYRILLIC_IE: u32 = 'е' as u32;
const CYRILLIC_YA: u32 = 'я' as u32;

/// (script class, position within class)
fn primary_weight(c: char) -> (u8, u32) {
    let lower = fold_case(c);

    if lower.is_whitespace() {
        return (0, lower as u32);
    }
    if lower.is_ascii_punctuation() || (!lower.is_alphanumeric() && !lower.is_whitespace()) {
        return (1, lower as u32);
    }
    if lower.is_ascii_digit() {
        return (2, lower as u32);
    }
    if lower.is_ascii_lowercase() {
        return (3, lower as u32);
    }

    let code = lower as u32;
    if lower == 'ё' {
        return (4, (CYRILLIC_IE - CYRILLIC_A) * 2 + 1);
    }
    if (CYRILLIC_A..=CYRILLIC_YA).contains(&code) {
        return (4, (code - CYRILLIC_A) * 2);
    }

    (5, code)
}

fn case_weight(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_alphabet_order() {
        let mut regions = vec!["Тыва", "Алтай", "Ёлкино", "Елань", "Жуково", "Бурятия"];
        regions.sort_by(|a, b| compare_ru(a, b));
        assert_eq!(
            regions,
            vec!["Алтай", "Бурятия", "Елань", "Ёлкино", "Жуково", "Тыва"]
        );
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(compare_ru("алтай", "Бурятия"), Ordering::Less);
        assert_eq!(compare_ru("алтай", "Алтай"), Ordering::Less);
        assert_eq!(compare_ru("Алтай", "Алтай"), Ordering::Equal);
    }

    #[test]
    fn test_empty_and_prefix_first() {
        assert_eq!(compare_ru("", "Алтай"), Ordering::Less);
        assert_eq!(compare_ru("Алтай", "Алтайский край"), Ordering::Less);
    }

    #[test]
    fn test_latin_before_cyrillic_and_digits_first() {
        assert_eq!(compare_ru("Zeta", "Алтай"), Ordering::Less);
        assert_eq!(compare_ru("1-й участок", "Алтай"), Ordering::Less);
    }
}
