//! Colored output for the plain CLI mode

use crate::core::{GuessResult, KeyboardState, LetterStatus, normalize_letter};
use colored::Colorize;

/// Print a scored row as colored tiles
pub fn print_guess_row(result: &GuessResult) {
    let mut line = String::new();
    for (ch, status) in result.display().iter().zip(result.statuses()) {
        let tile = format!(" {} ", uppercase(*ch));
        let tile = match status {
            LetterStatus::Correct => tile.black().on_green().bold(),
            LetterStatus::Present => tile.black().on_yellow().bold(),
            LetterStatus::Absent => tile.white().on_bright_black(),
        };
        line.push_str(&tile.to_string());
        line.push(' ');
    }
    println!("  {line}");
}

/// Print the aggregated keyboard hints as three QWERTY rows
///
/// Blocked letters are struck through; untouched letters print plain.
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in [(0, "qwertyuiop"), (1, "asdfghjklç"), (2, "zxcvbnm")] {
        let mut line = " ".repeat(indent);
        for ch in row.chars() {
            let key = uppercase(ch).to_string();
            let normalized = normalize_letter(ch);
            let key = if keyboard.is_blocked(normalized) {
                key.strikethrough().dimmed()
            } else {
                match keyboard.hint(normalized) {
                    Some(LetterStatus::Correct) => key.black().on_green().bold(),
                    Some(LetterStatus::Present) => key.black().on_yellow().bold(),
                    Some(LetterStatus::Absent) => key.dimmed(),
                    None => key.normal(),
                }
            };
            line.push_str(&key.to_string());
            line.push(' ');
        }
        println!("  {line}");
    }
}

pub(crate) fn uppercase(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}
