//! Palavra - CLI
//!
//! Terminal Wordle-style game for Portuguese words, with TUI and plain CLI
//! modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use palavra::{
    commands::run_simple,
    interactive::{App, run_tui},
    wordlists::{Dictionary, PALAVRAS},
};

#[derive(Parser)]
#[command(
    name = "palavra",
    about = "Terminal word-guessing game for Portuguese (Wordle-style, accent-insensitive)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (line-based, no TUI)
    Simple,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    let dictionary = match wordlist_mode {
        "embedded" => Dictionary::from_slice(PALAVRAS)?,
        path => Dictionary::load_from_file(path)?,
    };
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(dictionary)),
        Commands::Simple => run_simple(&dictionary).map_err(|e| anyhow::anyhow!(e)),
    }
}
