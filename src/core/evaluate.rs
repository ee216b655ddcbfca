//! Guess evaluation
//!
//! Scores a submitted row against the secret word with Wordle's exact
//! feedback rules, including proper handling of duplicate letters:
//!
//! 1. First pass: mark exact-position matches (`Correct`) and remove them
//!    from the available pool
//! 2. Second pass: mark present-but-misplaced letters (`Present`) from the
//!    remaining pool, left to right; everything else is `Absent`
//!
//! A letter already consumed by an exact match can never also satisfy a
//! `Present` match at another position, so the number of `Present` marks for
//! a letter never exceeds its occurrences in the secret minus its `Correct`
//! marks.

use super::normalize::normalize_letter;
use super::{LetterStatus, WORD_LENGTH, Word};

/// Scored feedback for one submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    statuses: [LetterStatus; WORD_LENGTH],
    normalized: String,
    display: [char; WORD_LENGTH],
}

impl GuessResult {
    /// Per-position feedback, in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// The normalized form of the guessed word
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Letters to display for this row
    ///
    /// Same as the guessed letters, except that an exact-position match
    /// against an accented secret letter shows the secret's original glyph
    /// (guessing `a` where the secret has `ã` displays `ã`).
    #[inline]
    #[must_use]
    pub const fn display(&self) -> &[char; WORD_LENGTH] {
        &self.display
    }

    /// Whether every position matched
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.statuses.iter().all(|s| *s == LetterStatus::Correct)
    }
}

/// Score a guess against the secret word
///
/// # Examples
/// ```
/// use palavra::core::{LetterStatus, Word, evaluate};
///
/// let secret = Word::new("avião").unwrap();
/// let result = evaluate(&['l', 'i', 'm', 'a', 'o'], &secret);
///
/// assert_eq!(result.statuses()[3], LetterStatus::Correct);
/// assert_eq!(result.statuses()[4], LetterStatus::Correct);
/// assert_eq!(result.display()[3], 'ã');
/// ```
#[must_use]
pub fn evaluate(guess: &[char; WORD_LENGTH], secret: &Word) -> GuessResult {
    let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
    let mut display = *guess;
    let mut available = secret.letter_counts();

    // First pass: exact-position matches, consumed from the pool
    for i in 0..WORD_LENGTH {
        let letter = normalize_letter(guess[i]);
        if letter == secret.normalized_chars()[i] {
            statuses[i] = LetterStatus::Correct;

            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }

            // Show the secret's original glyph when the guess omitted the accent
            if guess[i] != secret.chars()[i] {
                display[i] = secret.chars()[i];
            }
        }
    }

    // Second pass: misplaced letters from whatever the first pass left over
    for i in 0..WORD_LENGTH {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        let letter = normalize_letter(guess[i]);
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            statuses[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    let normalized = guess.iter().map(|&c| normalize_letter(c)).collect();

    GuessResult {
        statuses,
        normalized,
        display,
    }
}
