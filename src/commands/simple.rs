//! Simple interactive CLI mode
//!
//! Line-based game without TUI: type a full word per turn, get colored
//! feedback and an updated keyboard summary.

use crate::core::{InputOutcome, MAX_TRIES, Phase, Session, SubmitError, normalize_letter};
use crate::output::display::{print_guess_row, print_keyboard};
use crate::output::formatters::share_grid;
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(dictionary: &Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 PALAVRA - Modo de Linha de Comando           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Adivinhe a palavra de 5 letras em até {MAX_TRIES} tentativas.");
    println!("Acentos são opcionais: 'aviao' encontra 'avião'.\n");
    println!("Comandos: 'sair' para encerrar, 'nova' para recomeçar\n");

    let mut session = Session::new(dictionary.pick_secret());

    loop {
        let prompt = format!("Tentativa {}/{MAX_TRIES}", session.row() + 1);
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "sair" | "quit" | "q" => {
                println!("\nAté a próxima!\n");
                return Ok(());
            }
            "nova" | "new" | "n" => {
                session = Session::new(dictionary.pick_secret());
                println!("\nNovo jogo iniciado!\n");
                continue;
            }
            _ => {}
        }

        // Start the row from scratch, then type the input through the
        // same per-letter path the TUI uses
        while session.delete_letter() == InputOutcome::Accepted {}
        let mut skipped_blocked = false;
        for ch in input.chars() {
            if session.keyboard().is_blocked(normalize_letter(ch)) {
                skipped_blocked = true;
            }
            session.enter_letter(ch);
        }

        match session.submit(dictionary) {
            Err(SubmitError::IncompleteWord) => {
                if skipped_blocked {
                    println!("  {}\n", "Palavra contém letra bloqueada".yellow());
                } else {
                    println!("  {}\n", "Palavra incompleta".yellow());
                }
            }
            Err(SubmitError::NotInDictionary) => {
                println!("  {}\n", "Palavra não está na lista".yellow());
            }
            Err(SubmitError::GameOver) => {
                // Unreachable in this loop; a finished game restarts below
            }
            Ok(submission) => {
                println!();
                for result in session.history() {
                    print_guess_row(result);
                }
                println!();
                print_keyboard(session.keyboard());
                println!();

                match submission.phase {
                    Phase::Active => {}
                    Phase::Won => {
                        println!("{}", "Você venceu!".green().bold());
                        println!("\n{}", share_grid(session.history(), true));
                        if !play_again()? {
                            return Ok(());
                        }
                        session = Session::new(dictionary.pick_secret());
                    }
                    Phase::Lost => {
                        let secret = session.secret().original().to_uppercase();
                        println!(
                            "{}",
                            format!("Você perdeu! A palavra era: {secret}").red().bold()
                        );
                        println!("\n{}", share_grid(session.history(), false));
                        if !play_again()? {
                            return Ok(());
                        }
                        session = Session::new(dictionary.pick_secret());
                    }
                }
            }
        }
    }
}

fn play_again() -> Result<bool, String> {
    loop {
        match get_user_input("Jogar novamente? (s/n)")?.to_lowercase().as_str() {
            "s" | "sim" | "y" | "yes" => return Ok(true),
            "n" | "não" | "nao" | "no" => {
                println!("\nAté a próxima!\n");
                return Ok(false);
            }
            _ => {}
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
