//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterStatus, MAX_TRIES};

/// Format a scored row as an emoji string
///
/// # Examples
/// ```
/// use palavra::core::{Word, evaluate};
/// use palavra::output::result_to_emoji;
///
/// let secret = Word::new("carro").unwrap();
/// let result = evaluate(&['r', 'u', 'r', 'a', 'l'], &secret);
/// assert_eq!(result_to_emoji(&result), "🟨⬛🟩🟨⬛");
/// ```
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result
        .statuses()
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬛',
        })
        .collect()
}

/// Format a finished game as a shareable grid
///
/// The header reads `Palavra 3/6` on a win and `Palavra X/6` on a loss,
/// followed by one emoji row per guess.
#[must_use]
pub fn share_grid(history: &[GuessResult], won: bool) -> String {
    let score = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("Palavra {score}/{MAX_TRIES}\n");
    for result in history {
        grid.push_str(&result_to_emoji(result));
        grid.push('\n');
    }
    grid
}
