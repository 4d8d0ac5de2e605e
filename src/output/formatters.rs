//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore};

/// Format a feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .scores()
        .iter()
        .map(|score| match score {
            LetterScore::Absent => '⬜',
            LetterScore::Misplaced => '🟨',
            LetterScore::Correct => '🟩',
        })
        .collect()
}

/// Build the shareable result grid: one emoji line per scored guess
///
/// The header shows the number of guesses on a win and an "X" on a loss,
/// matching the familiar share format.
#[must_use]
pub fn share_grid(history: &[Feedback], won: bool) -> String {
    let score = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };

    let mut grid = format!("Wordle {score}/6\n");
    for feedback in history {
        grid.push_str(&feedback_to_emoji(*feedback));
        grid.push('\n');
    }
    grid
}
