//! Display functions for the CLI game mode

use super::formatters::feedback_to_emoji;
use crate::core::{Feedback, LetterScore};
use colored::Colorize;

/// Print one scored guess as colored letter blocks plus an emoji summary
pub fn print_guess_row(word: &str, feedback: Feedback) {
    let blocks: String = word
        .chars()
        .zip(feedback.scores())
        .map(|(letter, score)| {
            let cell = format!(" {} ", letter.to_ascii_uppercase());
            match score {
                LetterScore::Correct => cell.black().on_green().bold().to_string(),
                LetterScore::Misplaced => cell.black().on_yellow().bold().to_string(),
                LetterScore::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect();

    println!("  {}  {}", blocks, feedback_to_emoji(feedback));
}

/// Print the win banner
pub fn print_win(turns: usize) {
    let performance = match turns {
        1 => ("🏆 Genius!", "Incredible hole-in-one!"),
        2 => ("⭐ Magnificent!", "Outstanding performance!"),
        3 => ("💫 Impressive!", "Very well played!"),
        4 => ("✨ Splendid!", "Nice work!"),
        5 => ("👍 Great!", "Got it!"),
        _ => ("😅 Phew!", "That was close!"),
    };

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉  C O N G R A T S !   Y O U   W O N !  🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );
    println!();
}

/// Print the loss banner, revealing the target word
pub fn print_loss(target: &str) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    Y O U   L O S T    ".bright_red().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  The word was {}",
        target.to_uppercase().bright_yellow().bold()
    );
    println!();
}
