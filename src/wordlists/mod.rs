//! Portuguese word lists
//!
//! Provides the embedded word list compiled into the binary plus the
//! `Dictionary` the game draws secrets from and validates guesses against.

mod embedded;
pub mod loader;

pub use embedded::{PALAVRAS, PALAVRAS_COUNT};
pub use loader::{Dictionary, DictionaryError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn palavras_count_matches_const() {
        assert_eq!(PALAVRAS.len(), PALAVRAS_COUNT);
    }

    #[test]
    fn palavras_are_valid_words() {
        for &word in PALAVRAS {
            assert_eq!(
                word.chars().count(),
                WORD_LENGTH,
                "Word '{word}' is not {WORD_LENGTH} letters"
            );
            assert!(
                word.chars().all(char::is_alphabetic),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn palavras_carry_accented_forms() {
        // The list keeps original accents; normalization happens at load
        assert!(PALAVRAS.contains(&"avião"));
        assert!(PALAVRAS.contains(&"limão"));
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dictionary = Dictionary::from_slice(PALAVRAS).unwrap();
        assert_eq!(dictionary.len(), PALAVRAS_COUNT);
    }
}
