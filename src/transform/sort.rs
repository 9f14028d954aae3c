//! Deterministic row ordering by set code and collector number.

use std::cmp::Ordering;

use crate::model::Row;
use crate::parser::parse_leading_int;

/// Compare two strings the way a default-locale collation orders set codes:
/// case-insensitively first, lowercase before uppercase on ties.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .find(|o| o.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    })
}

/// Numeric sort key of a collector number; unusable values sort last.
pub fn collector_key(collector_number: Option<&str>) -> i64 {
    collector_number
        .and_then(parse_leading_int)
        .unwrap_or(i64::MAX)
}

/// Sort rows by set code, then collector number. Stable for equal keys.
pub fn sort_rows(mut rows: Vec<Row>) -> Vec<Row> {
    rows.sort_by(|a, b| {
        locale_cmp(&a.set_code, &b.set_code).then_with(|| {
            collector_key(a.collector_number.as_deref())
                .cmp(&collector_key(b.collector_number.as_deref()))
        })
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(rows: &[Row]) -> Vec<(String, Option<String>)> {
        rows.iter()
            .map(|r| (r.set_code.clone(), r.collector_number.clone()))
            .collect()
    }

    // ==================== locale_cmp tests ====================

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("abc", "ABD"), Ordering::Less);
        assert_eq!(locale_cmp("WAR", "abc"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_lowercase_first_on_tie() {
        assert_eq!(locale_cmp("war", "WAR"), Ordering::Less);
        assert_eq!(locale_cmp("WAR", "WAR"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_empty_first() {
        assert_eq!(locale_cmp("", "A"), Ordering::Less);
    }

    // ==================== sort_rows tests ====================

    #[test]
    fn test_sort_by_set_then_number() {
        let rows = vec![
            Row::new("a", "WAR", Some("12"), 1),
            Row::new("b", "ABC", Some("x"), 1),
            Row::new("c", "ABC", Some("3"), 1),
        ];
        assert_eq!(
            keys(&sort_rows(rows)),
            vec![
                ("ABC".to_string(), Some("3".to_string())),
                ("ABC".to_string(), Some("x".to_string())),
                ("WAR".to_string(), Some("12".to_string())),
            ]
        );
    }

    #[test]
    fn test_sort_numbers_numerically() {
        let rows = vec![
            Row::new("a", "M19", Some("100"), 1),
            Row::new("b", "M19", Some("9"), 1),
            Row::new("c", "M19", None, 1),
            Row::new("d", "M19", Some("25a"), 1),
        ];
        let names: Vec<_> = sort_rows(rows).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = vec![
            Row::new("first", "XLN", Some("5"), 1),
            Row::new("second", "XLN", Some("5"), 2),
            Row::new("third", "XLN", None, 1),
            Row::new("fourth", "XLN", Some("?"), 1),
        ];
        let names: Vec<_> = sort_rows(rows).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_collector_key() {
        assert_eq!(collector_key(Some("42")), 42);
        assert_eq!(collector_key(Some("x")), i64::MAX);
        assert_eq!(collector_key(None), i64::MAX);
    }
}
