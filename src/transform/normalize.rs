//! Card-name normalization used as the matching key.

use crate::config::{APOSTROPHE_REPLACEMENT, APOSTROPHE_VARIANTS, DFC_SEPARATOR};

/// Canonical form of a card name.
///
/// Keeps only the front face of a double-faced name, folds apostrophe
/// variants to `_` and lowercases.
pub fn normalize(name: &str) -> String {
    let front = name.split(DFC_SEPARATOR).next().unwrap_or(name);
    front
        .chars()
        .map(|c| {
            if APOSTROPHE_VARIANTS.contains(&c) {
                APOSTROPHE_REPLACEMENT
            } else {
                c
            }
        })
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain() {
        assert_eq!(normalize("Lightning Bolt"), "lightning bolt");
    }

    #[test]
    fn test_normalize_double_faced() {
        assert_eq!(normalize("Bruna's // Gisela's"), "bruna_s");
    }

    #[test]
    fn test_normalize_apostrophe_variants() {
        assert_eq!(normalize("Urza\u{2019}s Saga"), "urza_s saga");
        assert_eq!(normalize("Urza`s Saga"), "urza_s saga");
        assert_eq!(normalize("Urza's Saga"), "urza_s saga");
    }

    #[test]
    fn test_normalize_only_first_separator_counts() {
        assert_eq!(normalize("A // B // C"), "a");
    }

    #[test]
    fn test_normalize_separator_needs_spaces() {
        assert_eq!(normalize("Fire//Ice"), "fire//ice");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }
}
