//! Game session state machine
//!
//! A `Session` owns the secret word, the board of typed letters, the
//! row/column cursor, the keyboard hint aggregate and the guess history.
//! It accepts discrete inputs (letter, delete, cursor move, submit) and
//! answers each with either an updated state or a structured rejection;
//! nothing here panics on user input.
//!
//! Once the game is `Won` or `Lost` every mutating input is ignored.

use super::normalize::normalize_letter;
use super::{GuessResult, KeyboardState, MAX_TRIES, WORD_LENGTH, Word, evaluate};
use std::fmt;

/// Membership test the session consults when a row is submitted
///
/// Implemented by the word-list `Dictionary`; tests substitute small stubs.
pub trait Lexicon {
    /// Whether `normalized` (accent-stripped, lowercase) is a playable word
    fn contains_normalized(&self, normalized: &str) -> bool;
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input for the current row
    Active,
    /// The secret word was guessed
    Won,
    /// All tries were spent without guessing the word
    Lost,
}

/// Whether a letter/delete/cursor input changed anything
///
/// `Ignored` is a no-op signal, not an error: terminal state, a blocked
/// letter, or a cursor boundary. No notification is owed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Accepted,
    Ignored,
}

/// Why a submit attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The current row has fewer than `WORD_LENGTH` letters filled
    IncompleteWord,
    /// The normalized guess is not in the dictionary
    NotInDictionary,
    /// The game has already ended; nothing happened
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteWord => write!(f, "Palavra incompleta"),
            Self::NotInDictionary => write!(f, "Palavra não está na lista"),
            Self::GameOver => write!(f, "O jogo já terminou"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// What a successful submit produced
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Scored feedback for the submitted row
    pub result: GuessResult,
    /// Phase after the submission was applied
    pub phase: Phase,
}

/// A single game: secret word, board, cursor, hints, history
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    board: [[Option<char>; WORD_LENGTH]; MAX_TRIES],
    row: usize,
    col: usize,
    phase: Phase,
    keyboard: KeyboardState,
    history: Vec<GuessResult>,
}

impl Session {
    /// Start a game with the given secret word
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            board: [[None; WORD_LENGTH]; MAX_TRIES],
            row: 0,
            col: 0,
            phase: Phase::Active,
            keyboard: KeyboardState::default(),
            history: Vec::new(),
        }
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Current attempt index (0-based)
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Current cursor column (0-based, up to `WORD_LENGTH`)
    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Where the game stands
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has ended
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase != Phase::Active
    }

    /// Aggregated keyboard hints
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Scored results of all submitted rows, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    /// Letter typed at a board position, if any
    #[inline]
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<char> {
        self.board.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Place a letter at the cursor and advance it
    ///
    /// Ignored while the game is over, for blocked letters, for anything
    /// that does not normalize to a basic Latin letter, and when the row is
    /// already full. The letter is stored lowercased as typed (accents
    /// intact); matching happens on the normalized form at submit time.
    pub fn enter_letter(&mut self, ch: char) -> InputOutcome {
        if self.phase != Phase::Active {
            return InputOutcome::Ignored;
        }

        let normalized = normalize_letter(ch);
        if !normalized.is_ascii_lowercase() {
            return InputOutcome::Ignored;
        }
        if self.keyboard.is_blocked(normalized) {
            return InputOutcome::Ignored;
        }
        if self.col == WORD_LENGTH {
            return InputOutcome::Ignored;
        }

        let lowered = ch.to_lowercase().next().unwrap_or(ch);
        self.board[self.row][self.col] = Some(lowered);
        self.col += 1;
        InputOutcome::Accepted
    }

    /// Delete a letter in the current row
    ///
    /// Two-branch rule: if the tile under the cursor is filled (the cursor
    /// was repositioned onto it), clear it in place without moving.
    /// Otherwise act as a plain backspace: step left and clear the tile
    /// there. Ignored at column 0 with nothing under the cursor, and while
    /// the game is over.
    pub fn delete_letter(&mut self) -> InputOutcome {
        if self.phase != Phase::Active {
            return InputOutcome::Ignored;
        }

        // Edit in place when the cursor sits on a filled tile
        if self.col < WORD_LENGTH && self.board[self.row][self.col].is_some() {
            self.board[self.row][self.col] = None;
            return InputOutcome::Accepted;
        }

        if self.col > 0 {
            self.col -= 1;
            self.board[self.row][self.col] = None;
            return InputOutcome::Accepted;
        }

        InputOutcome::Ignored
    }

    /// Move the cursor within the current row (pointer-driven editing)
    ///
    /// Legal only while the game is active and for columns of the current
    /// row; anything else is ignored.
    pub fn reposition_cursor(&mut self, col: usize) -> InputOutcome {
        if self.phase != Phase::Active || col >= WORD_LENGTH {
            return InputOutcome::Ignored;
        }
        self.col = col;
        InputOutcome::Accepted
    }

    /// Submit the current row as a guess
    ///
    /// On success the row is scored, every letter/status pair is folded into
    /// the keyboard hints, and the game advances: `Won` on a full match,
    /// `Lost` after the last try, otherwise on to the next row with the
    /// cursor reset.
    ///
    /// # Errors
    /// - [`SubmitError::IncompleteWord`] if the row has an empty tile or the
    ///   cursor has not reached the end of the row; state unchanged
    /// - [`SubmitError::NotInDictionary`] if the normalized guess is not a
    ///   playable word; state unchanged
    /// - [`SubmitError::GameOver`] if the game already ended
    pub fn submit<L: Lexicon>(&mut self, lexicon: &L) -> Result<Submission, SubmitError> {
        if self.phase != Phase::Active {
            return Err(SubmitError::GameOver);
        }
        if self.col != WORD_LENGTH {
            return Err(SubmitError::IncompleteWord);
        }

        let mut letters = ['\0'; WORD_LENGTH];
        for (i, slot) in self.board[self.row].iter().enumerate() {
            // A hole left by in-place deletion counts as incomplete
            match slot {
                Some(ch) => letters[i] = *ch,
                None => return Err(SubmitError::IncompleteWord),
            }
        }

        let normalized: String = letters.iter().map(|&c| normalize_letter(c)).collect();
        if !lexicon.contains_normalized(&normalized) {
            return Err(SubmitError::NotInDictionary);
        }

        let result = evaluate(&letters, &self.secret);
        for (&ch, &status) in letters.iter().zip(result.statuses()) {
            self.keyboard.update(normalize_letter(ch), status, &self.secret);
        }

        if normalized == self.secret.normalized() {
            self.phase = Phase::Won;
        } else {
            self.row += 1;
            self.col = 0;
            if self.row == MAX_TRIES {
                self.phase = Phase::Lost;
            }
        }

        self.history.push(result.clone());
        Ok(Submission {
            result,
            phase: self.phase,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize_word;
    use crate::core::LetterStatus;

    struct Lex(&'static [&'static str]);

    impl Lexicon for Lex {
        fn contains_normalized(&self, normalized: &str) -> bool {
            self.0.iter().any(|w| normalize_word(w) == normalized)
        }
    }

    const LEX: Lex = Lex(&[
        "carro", "rural", "terra", "festa", "limão", "avião", "tempo", "sorte", "feliz", "zebra",
        "carta", "barco", "claro", "couro", "corda", "campo", "viola", "molho", "limpo", "maior",
        "lagoa", "moeda",
    ]);

    // Guess sequences for multi-turn tests. Each entry only introduces
    // letters not yet blocked by the previous entries, so every row can be
    // typed in full.
    const CARRO_MISSES: [&str; MAX_TRIES] = ["carta", "barco", "claro", "couro", "corda", "campo"];
    const LIMAO_MISSES: [&str; MAX_TRIES] = ["viola", "molho", "limpo", "maior", "lagoa", "moeda"];

    fn type_word(session: &mut Session, word: &str) {
        for ch in word.chars() {
            session.enter_letter(ch);
        }
    }

    fn new_session(secret: &str) -> Session {
        Session::new(Word::new(secret).unwrap())
    }

    #[test]
    fn letters_fill_left_to_right() {
        let mut session = new_session("carro");
        assert_eq!(session.enter_letter('t'), InputOutcome::Accepted);
        assert_eq!(session.enter_letter('e'), InputOutcome::Accepted);
        assert_eq!(session.col(), 2);
        assert_eq!(session.tile(0, 0), Some('t'));
        assert_eq!(session.tile(0, 1), Some('e'));
    }

    #[test]
    fn row_does_not_overflow() {
        let mut session = new_session("carro");
        type_word(&mut session, "terra");
        assert_eq!(session.col(), WORD_LENGTH);
        assert_eq!(session.enter_letter('x'), InputOutcome::Ignored);
        assert_eq!(session.col(), WORD_LENGTH);
    }

    #[test]
    fn non_letters_ignored() {
        let mut session = new_session("carro");
        assert_eq!(session.enter_letter('1'), InputOutcome::Ignored);
        assert_eq!(session.enter_letter(' '), InputOutcome::Ignored);
        assert_eq!(session.col(), 0);
    }

    #[test]
    fn cedilla_accepted() {
        let mut session = new_session("carro");
        assert_eq!(session.enter_letter('ç'), InputOutcome::Accepted);
        assert_eq!(session.tile(0, 0), Some('ç'));
    }

    #[test]
    fn backspace_deletes_to_the_left() {
        let mut session = new_session("carro");
        type_word(&mut session, "ter");
        assert_eq!(session.delete_letter(), InputOutcome::Accepted);
        assert_eq!(session.col(), 2);
        assert_eq!(session.tile(0, 2), None);
    }

    #[test]
    fn backspace_at_row_start_is_ignored() {
        let mut session = new_session("carro");
        assert_eq!(session.delete_letter(), InputOutcome::Ignored);
        assert_eq!(session.col(), 0);
    }

    #[test]
    fn delete_in_place_after_repositioning() {
        let mut session = new_session("carro");
        type_word(&mut session, "terra");

        // Click tile 1: the cursor sits on a filled tile, so delete clears
        // it in place and stays put
        assert_eq!(session.reposition_cursor(1), InputOutcome::Accepted);
        assert_eq!(session.delete_letter(), InputOutcome::Accepted);
        assert_eq!(session.col(), 1);
        assert_eq!(session.tile(0, 1), None);

        // The tile is now empty, so a second delete falls back to plain
        // backspace and steps left
        assert_eq!(session.delete_letter(), InputOutcome::Accepted);
        assert_eq!(session.col(), 0);
        assert_eq!(session.tile(0, 0), None);
    }

    #[test]
    fn reposition_bounds() {
        let mut session = new_session("carro");
        type_word(&mut session, "terra");
        assert_eq!(session.reposition_cursor(4), InputOutcome::Accepted);
        assert_eq!(session.col(), 4);
        assert_eq!(session.reposition_cursor(WORD_LENGTH), InputOutcome::Ignored);
        assert_eq!(session.col(), 4);
    }

    #[test]
    fn submit_incomplete_row_rejected() {
        let mut session = new_session("carro");
        type_word(&mut session, "ter");
        assert_eq!(session.submit(&LEX), Err(SubmitError::IncompleteWord));
        assert_eq!(session.row(), 0);
        assert_eq!(session.col(), 3);
    }

    #[test]
    fn submit_with_hole_rejected() {
        let mut session = new_session("carro");
        type_word(&mut session, "terra");
        // Carve a hole mid-row, then move the cursor back to the end by
        // refilling is skipped: the cursor is at WORD_LENGTH but tile 2 is gone
        session.reposition_cursor(2);
        session.delete_letter();
        session.reposition_cursor(4);
        session.enter_letter('a');
        assert_eq!(session.col(), WORD_LENGTH);
        assert_eq!(session.submit(&LEX), Err(SubmitError::IncompleteWord));
    }

    #[test]
    fn submit_unknown_word_rejected() {
        let mut session = new_session("carro");
        type_word(&mut session, "zzzzz");
        assert_eq!(session.submit(&LEX), Err(SubmitError::NotInDictionary));
        assert_eq!(session.row(), 0);
        assert_eq!(session.col(), WORD_LENGTH);
        assert!(session.history().is_empty());
    }

    #[test]
    fn submit_advances_to_next_row() {
        let mut session = new_session("carro");
        type_word(&mut session, "festa");
        let submission = session.submit(&LEX).unwrap();
        assert_eq!(submission.phase, Phase::Active);
        assert_eq!(session.row(), 1);
        assert_eq!(session.col(), 0);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut session = new_session("carro");
        type_word(&mut session, "carro");
        let submission = session.submit(&LEX).unwrap();
        assert_eq!(submission.phase, Phase::Won);
        assert!(session.is_over());
        // The winning row is not advanced past
        assert_eq!(session.row(), 0);
    }

    #[test]
    fn accentless_typing_wins_accented_secret() {
        let mut session = new_session("avião");
        type_word(&mut session, "aviao");
        let submission = session.submit(&LEX).unwrap();
        assert_eq!(submission.phase, Phase::Won);
        assert_eq!(submission.result.display(), &['a', 'v', 'i', 'ã', 'o']);
    }

    #[test]
    fn win_on_last_try_beats_loss() {
        let mut session = new_session("carro");
        for &guess in &CARRO_MISSES[..MAX_TRIES - 1] {
            type_word(&mut session, guess);
            session.submit(&LEX).unwrap();
        }
        assert_eq!(session.row(), MAX_TRIES - 1);
        type_word(&mut session, "carro");
        let submission = session.submit(&LEX).unwrap();
        assert_eq!(submission.phase, Phase::Won);
    }

    #[test]
    fn max_tries_without_win_loses() {
        let mut session = new_session("carro");
        for (i, &guess) in CARRO_MISSES.iter().enumerate() {
            type_word(&mut session, guess);
            let submission = session.submit(&LEX).unwrap();
            if i < MAX_TRIES - 1 {
                assert_eq!(submission.phase, Phase::Active);
            } else {
                assert_eq!(submission.phase, Phase::Lost);
            }
        }
        assert!(session.is_over());
        // The loss message needs the original accented form
        assert_eq!(session.secret().original(), "carro");
    }

    #[test]
    fn lost_game_reports_accented_secret() {
        let mut session = new_session("limão");
        for guess in LIMAO_MISSES {
            type_word(&mut session, guess);
            session.submit(&LEX).unwrap();
        }
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.secret().original(), "limão");
    }

    #[test]
    fn terminal_state_freezes_all_input() {
        let mut session = new_session("carro");
        type_word(&mut session, "carro");
        session.submit(&LEX).unwrap();

        assert_eq!(session.enter_letter('a'), InputOutcome::Ignored);
        assert_eq!(session.delete_letter(), InputOutcome::Ignored);
        assert_eq!(session.reposition_cursor(0), InputOutcome::Ignored);
        assert_eq!(session.submit(&LEX), Err(SubmitError::GameOver));
    }

    #[test]
    fn blocked_letter_cannot_be_typed_again() {
        let mut session = new_session("carro");
        // FELIZ shares no letter with CARRO, so all five get blocked
        type_word(&mut session, "feliz");
        session.submit(&LEX).unwrap();

        assert!(session.keyboard().is_blocked('z'));
        assert_eq!(session.enter_letter('z'), InputOutcome::Ignored);
        assert_eq!(session.col(), 0);
    }

    #[test]
    fn absent_duplicate_of_present_letter_not_blocked() {
        let mut session = new_session("carro");
        // RURAL's second R scores Present, first R Present, so R stays usable;
        // U and L are fully absent and get blocked
        type_word(&mut session, "rural");
        session.submit(&LEX).unwrap();

        assert!(!session.keyboard().is_blocked('r'));
        assert!(session.keyboard().is_blocked('u'));
        assert!(session.keyboard().is_blocked('l'));
        assert_eq!(session.enter_letter('r'), InputOutcome::Accepted);
    }

    #[test]
    fn keyboard_hints_follow_submissions() {
        let mut session = new_session("carro");
        type_word(&mut session, "rural");
        session.submit(&LEX).unwrap();

        assert_eq!(session.keyboard().hint('r'), Some(LetterStatus::Correct));
        assert_eq!(session.keyboard().hint('a'), Some(LetterStatus::Present));
        assert_eq!(session.keyboard().hint('u'), Some(LetterStatus::Absent));
    }

    #[test]
    fn end_to_end_first_guess() {
        use LetterStatus::{Absent, Correct, Present};

        let mut session = new_session("avião");
        type_word(&mut session, "limao");
        let submission = session.submit(&LEX).unwrap();

        assert_eq!(
            submission.result.statuses(),
            &[Absent, Present, Absent, Correct, Correct]
        );
        assert_eq!(submission.phase, Phase::Active);
        assert_eq!(session.row(), 1);
        assert_eq!(session.col(), 0);
        assert_eq!(session.keyboard().hint('a'), Some(Correct));
        assert_eq!(session.keyboard().hint('i'), Some(Present));
        assert_eq!(session.keyboard().hint('l'), Some(Absent));
        assert!(session.keyboard().is_blocked('l'));
        assert!(!session.keyboard().is_blocked('i'));
    }
}
