//! Accent-insensitive text normalization
//!
//! Portuguese words carry acute, grave, circumflex, tilde and cedilla marks.
//! All comparisons in the game happen on the normalized form: NFD-decomposed,
//! combining marks stripped, lowercased. The original accented form is kept
//! separately for display.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a word for comparison
///
/// Decomposes accented characters (NFD), drops the combining marks, and
/// lowercases what remains. Idempotent, and preserves the letter count for
/// alphabetic input (`ç` becomes `c`, `ã` becomes `a`, and so on).
///
/// # Examples
/// ```
/// use palavra::core::normalize_word;
///
/// assert_eq!(normalize_word("Avião"), "aviao");
/// assert_eq!(normalize_word("coração"), "coracao");
/// assert_eq!(normalize_word(&normalize_word("Lição")), normalize_word("Lição"));
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalize a single letter
///
/// Single-character version of [`normalize_word`]: `'Ç'` maps to `'c'`,
/// `'ã'` to `'a'`. Characters without a decomposition pass through
/// lowercased.
#[must_use]
pub fn normalize_letter(letter: char) -> char {
    letter
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .next()
        .unwrap_or(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_portuguese_diacritics() {
        assert_eq!(normalize_word("avião"), "aviao");
        assert_eq!(normalize_word("limão"), "limao");
        assert_eq!(normalize_word("força"), "forca");
        assert_eq!(normalize_word("saúde"), "saude");
        assert_eq!(normalize_word("aéreo"), "aereo");
        assert_eq!(normalize_word("túnel"), "tunel");
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize_word("CARRO"), "carro");
        assert_eq!(normalize_word("AviÃo"), "aviao");
    }

    #[test]
    fn idempotent() {
        for word in ["avião", "Lição", "CORAÇÃO", "carro", "ímpar"] {
            let once = normalize_word(word);
            assert_eq!(normalize_word(&once), once);
        }
    }

    #[test]
    fn preserves_letter_count() {
        for word in ["avião", "lenço", "sério", "águas", "leões"] {
            assert_eq!(
                normalize_word(word).chars().count(),
                word.chars().count(),
                "letter count changed for '{word}'"
            );
        }
    }

    #[test]
    fn plain_ascii_unchanged() {
        assert_eq!(normalize_word("carro"), "carro");
        assert_eq!(normalize_word("rural"), "rural");
    }

    #[test]
    fn single_letters() {
        assert_eq!(normalize_letter('ç'), 'c');
        assert_eq!(normalize_letter('Ç'), 'c');
        assert_eq!(normalize_letter('ã'), 'a');
        assert_eq!(normalize_letter('é'), 'e');
        assert_eq!(normalize_letter('A'), 'a');
        assert_eq!(normalize_letter('x'), 'x');
    }
}
