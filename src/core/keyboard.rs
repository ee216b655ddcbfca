//! Keyboard hint aggregation
//!
//! Folds per-letter feedback across all submitted guesses into the best
//! status seen so far for each letter, so a keyboard view can color its keys.
//! Aggregation is upgrade-only: once a letter is known `Correct` it never
//! falls back to `Present` or `Absent`.
//!
//! Letters proven to have zero occurrences in the secret word go into a
//! separate blocked set and become permanently unusable for input.

use super::{LetterStatus, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Best-known feedback per normalized letter, plus the blocked-letter set
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    hints: FxHashMap<char, LetterStatus>,
    blocked: FxHashSet<char>,
}

impl KeyboardState {
    /// Fold one letter/status pair into the aggregate
    ///
    /// `letter` must be in normalized form. The stored hint is replaced only
    /// when the new status has strictly higher priority. An `Absent` verdict
    /// for a letter that occurs nowhere in the secret additionally blocks the
    /// letter; an `Absent` verdict for a letter that exists elsewhere in the
    /// secret (a spent duplicate) never does.
    pub fn update(&mut self, letter: char, status: LetterStatus, secret: &Word) {
        let current = self.hints.get(&letter).map_or(0, |s| s.priority());
        if status.priority() > current {
            self.hints.insert(letter, status);
        }

        if status == LetterStatus::Absent && !secret.contains_letter(letter) {
            self.blocked.insert(letter);
        }
    }

    /// Best status seen so far for a normalized letter
    #[inline]
    #[must_use]
    pub fn hint(&self, letter: char) -> Option<LetterStatus> {
        self.hints.get(&letter).copied()
    }

    /// Whether a letter is permanently unusable for input
    #[inline]
    #[must_use]
    pub fn is_blocked(&self, letter: char) -> bool {
        self.blocked.contains(&letter)
    }

    /// All blocked letters
    #[inline]
    #[must_use]
    pub const fn blocked_letters(&self) -> &FxHashSet<char> {
        &self.blocked
    }
}
