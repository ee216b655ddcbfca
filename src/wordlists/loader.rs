//! Word list loading and the game dictionary
//!
//! A `Dictionary` is a validated, never-empty set of playable words: the
//! source the secret word is drawn from and the membership test guesses are
//! checked against. Loading filters out blank lines, hyphenated entries and
//! anything that is not exactly five letters.

use crate::core::{Lexicon, Word};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary construction
#[derive(Debug)]
pub enum DictionaryError {
    /// The source yielded no usable words; a game cannot start
    Unavailable,
    /// The word list file could not be read
    Io(io::Error),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Dicionário não encontrado ou vazio"),
            Self::Io(e) => write!(f, "Erro ao carregar o dicionário: {e}"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// The set of playable words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    normalized: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// # Errors
    /// Returns [`DictionaryError::Unavailable`] if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Unavailable);
        }
        let normalized = words.iter().map(|w| w.normalized().to_string()).collect();
        Ok(Self { words, normalized })
    }

    /// Build a dictionary from a string slice list (the embedded list)
    ///
    /// Invalid entries are skipped.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Unavailable`] if no entry survives
    /// filtering.
    ///
    /// # Examples
    /// ```
    /// use palavra::wordlists::{Dictionary, PALAVRAS};
    ///
    /// let dictionary = Dictionary::from_slice(PALAVRAS).unwrap();
    /// assert!(dictionary.contains_normalized("aviao"));
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(slice))
    }

    /// Load a dictionary from a file with one word per line
    ///
    /// Blank lines, hyphenated entries and words of the wrong length are
    /// skipped, matching the filtering applied to the embedded list.
    ///
    /// # Errors
    /// Returns [`DictionaryError::Io`] if the file cannot be read, or
    /// [`DictionaryError::Unavailable`] if nothing usable remains.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path)?;
        Self::new(words_from_lines(&content))
    }

    /// Number of playable words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// All playable words
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Whether a normalized string is a playable word
    #[inline]
    #[must_use]
    pub fn contains_normalized(&self, normalized: &str) -> bool {
        self.normalized.contains(normalized)
    }

    /// Draw a random secret word for a new game
    ///
    /// # Panics
    /// Will not panic - construction rejects empty word lists.
    #[must_use]
    pub fn pick_secret(&self) -> Word {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .expect("dictionary is never empty")
    }
}

impl Lexicon for Dictionary {
    fn contains_normalized(&self, normalized: &str) -> bool {
        Self::contains_normalized(self, normalized)
    }
}

/// Convert a string slice list to validated words, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter(|word| !word.contains('-'))
        .filter_map(|&word| Word::new(word).ok())
        .collect()
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.contains('-') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}
