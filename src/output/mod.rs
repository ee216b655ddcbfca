//! Terminal output formatting
//!
//! Display utilities for the plain CLI mode and share-grid formatting.

pub mod display;
pub mod formatters;

pub use display::{print_guess_row, print_keyboard};
pub use formatters::{result_to_emoji, share_grid};
