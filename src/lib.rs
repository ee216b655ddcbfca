//! Palavra
//!
//! A terminal Wordle-style game for Portuguese five-letter words. Matching is
//! accent-insensitive: typing `aviao` finds `avião`, and exact-position hits
//! restore the accented glyph on the board.
//!
//! # Quick Start
//!
//! ```rust
//! use palavra::core::{LetterStatus, Word, evaluate};
//!
//! let secret = Word::new("avião").unwrap();
//! let result = evaluate(&['l', 'i', 'm', 'a', 'o'], &secret);
//!
//! assert_eq!(result.statuses()[3], LetterStatus::Correct);
//! assert_eq!(result.display()[3], 'ã');
//! ```

// Core game engine
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
