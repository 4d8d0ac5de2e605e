//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one guess per line, colored feedback rows.

use crate::core::{Feedback, Word};
use crate::engine::{Game, GameStatus, ROWS};
use crate::output::formatters::share_grid;
use crate::output::{print_guess_row, print_loss, print_win};
use std::io::{self, Write};

/// Run the simple line-based game mode
///
/// # Errors
///
/// Returns an error if the target word list is empty or if there's an I/O
/// error reading user input.
pub fn run_simple(dictionary: &[Word], targets: &[Word]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Terminal Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word in {ROWS} tries.");
    println!("After each guess the letters are colored:\n");
    println!("  - Green: correct position");
    println!("  - Yellow: in the word, wrong position");
    println!("  - Gray: not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = Game::new(dictionary, targets).ok_or("target word list is empty")?;
    let mut history: Vec<(String, Feedback)> = Vec::new();

    loop {
        let turn = game.current_row() + 1;
        let input = get_user_input(&format!("Guess {turn}/{ROWS}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "restart" => {
                game.restart();
                history.clear();
                println!("\n🔄 New game started!\n");
            }
            "" => {}
            guess if guess.len() == 5 && guess.chars().all(|c| c.is_ascii_alphabetic()) => {
                // Feed the word through the engine one key at a time
                for ch in guess.chars() {
                    game.press_letter(ch);
                }

                match game.submit_guess() {
                    Ok(feedback) => {
                        history.push((guess.to_string(), feedback));

                        println!();
                        for (word, fb) in &history {
                            print_guess_row(word, *fb);
                        }
                        println!();

                        if game.status() != GameStatus::InProgress
                            && !handle_game_over(&mut game, &mut history)?
                        {
                            return Ok(());
                        }
                    }
                    Err(err) => {
                        // Drop the rejected letters so the player can retype
                        while !game.buffer().is_empty() {
                            game.delete_letter();
                        }
                        println!("  ❌ {err}\n");
                    }
                }
            }
            _ => {
                println!("  ❌ Word must be exactly 5 letters!\n");
            }
        }
    }
}

/// Show the endgame banners and ask for another round
///
/// Returns `Ok(false)` when the player is done.
fn handle_game_over(
    game: &mut Game<'_>,
    history: &mut Vec<(String, Feedback)>,
) -> Result<bool, String> {
    let feedbacks: Vec<Feedback> = history.iter().map(|(_, fb)| *fb).collect();

    match game.status() {
        GameStatus::Won => {
            print_win(history.len());
            println!("{}", share_grid(&feedbacks, true));
        }
        GameStatus::Lost => {
            print_loss(game.target());
            println!("{}", share_grid(&feedbacks, false));
        }
        GameStatus::InProgress => return Ok(true),
    }

    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            game.restart();
            history.clear();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
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
