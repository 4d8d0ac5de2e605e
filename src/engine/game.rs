//! The Wordle game state machine
//!
//! One `Game` is one puzzle: a hidden target word, a 6x5 grid, a keyboard
//! verdict map and a buffer for the row being typed. All operations are
//! synchronous; animation timing is a presentation concern built on top of
//! [`reveal_schedule`].

use std::fmt;
use std::time::Duration;

use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

use super::board::{Board, ROWS};
use super::keyboard::Keyboard;
use crate::core::{Feedback, WORD_LENGTH, Word};

/// How long one tile flip takes in the reveal animation
pub const FLIP_DURATION: Duration = Duration::from_millis(500);

/// Delay between successive tile reveals within a scored row
pub const REVEAL_STAGGER: Duration = Duration::from_millis(250);

/// Delay between successive tile bounces when the winning row dances
pub const DANCE_STAGGER: Duration = Duration::from_millis(100);

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Recoverable rejection of a submitted guess
///
/// Both variants leave the game state untouched; the player edits the row
/// and retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Fewer than five letters entered
    Incomplete,
    /// The assembled word is not in the dictionary
    UnknownWord(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "Not enough letters"),
            Self::UnknownWord(word) => {
                write!(f, "{} is not in the word list", word.to_uppercase())
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// A single game of Wordle
///
/// Borrows the word lists for the lifetime of the session; the dictionary is
/// indexed into a hash set for membership tests.
pub struct Game<'a> {
    board: Board,
    keyboard: Keyboard,
    buffer: String,
    attempt: usize,
    target: Word,
    status: GameStatus,
    targets: &'a [Word],
    dictionary: FxHashSet<&'a str>,
}

impl<'a> Game<'a> {
    /// Start a game with a target drawn uniformly at random from `targets`
    ///
    /// Returns `None` if `targets` is empty; an empty target list is a setup
    /// error the caller reports.
    #[must_use]
    pub fn new(dictionary: &'a [Word], targets: &'a [Word]) -> Option<Self> {
        let target = targets.choose(&mut rand::rng())?.clone();
        Some(Self::with_target(dictionary, targets, target))
    }

    /// Start a game with a fixed target word
    #[must_use]
    pub fn with_target(dictionary: &'a [Word], targets: &'a [Word], target: Word) -> Self {
        Self {
            board: Board::new(),
            keyboard: Keyboard::new(),
            buffer: String::with_capacity(WORD_LENGTH),
            attempt: 0,
            target,
            status: GameStatus::InProgress,
            targets,
            dictionary: dictionary.iter().map(Word::text).collect(),
        }
    }

    /// Append a letter to the active row
    ///
    /// Uppercase input is normalized; anything other than an ASCII letter is
    /// ignored, as is any input once the game is over or the row is full.
    pub fn press_letter(&mut self, ch: char) {
        if self.status != GameStatus::InProgress {
            return;
        }
        let ch = ch.to_ascii_lowercase();
        if !ch.is_ascii_lowercase() || self.buffer.len() == WORD_LENGTH {
            return;
        }

        self.board.place(self.cursor(), ch);
        self.buffer.push(ch);
    }

    /// Remove the last letter of the active row
    pub fn delete_letter(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        if self.buffer.pop().is_some() {
            self.board.clear(self.cursor());
        }
    }

    /// Score the active row against the target
    ///
    /// On success the row's verdicts are written once, the keyboard is
    /// updated (upgrade-only) and the game may end: an exact match wins,
    /// a sixth scored row without one loses.
    ///
    /// # Errors
    /// - [`GuessError::Incomplete`] if fewer than five letters are entered
    ///   (or the game is already over); nothing changes
    /// - [`GuessError::UnknownWord`] if the word is not in the dictionary;
    ///   the typed letters stay active so the player can edit them
    pub fn submit_guess(&mut self) -> Result<Feedback, GuessError> {
        if self.status != GameStatus::InProgress || self.buffer.len() < WORD_LENGTH {
            return Err(GuessError::Incomplete);
        }
        if !self.dictionary.contains(self.buffer.as_str()) {
            return Err(GuessError::UnknownWord(self.buffer.clone()));
        }

        // The buffer only ever holds five ASCII lowercase letters
        let guess = Word::new(&self.buffer).expect("buffer is a valid five-letter word");
        let feedback = Feedback::score(&guess, &self.target);

        self.board.score_row(self.attempt, &guess, feedback);
        for (i, &score) in feedback.scores().iter().enumerate() {
            self.keyboard.record(guess.char_at(i) as char, score);
        }

        self.attempt += 1;
        self.buffer.clear();

        if feedback.is_win() {
            self.status = GameStatus::Won;
        } else if self.attempt == ROWS {
            self.status = GameStatus::Lost;
        }

        Ok(feedback)
    }

    /// Reset the grid, keyboard and status and draw a fresh target
    pub fn restart(&mut self) {
        self.board.reset();
        self.keyboard.reset();
        self.buffer.clear();
        self.attempt = 0;
        self.status = GameStatus::InProgress;
        if let Some(word) = self.targets.choose(&mut rand::rng()) {
            self.target = word.clone();
        }
    }

    /// The letter grid
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The on-screen keyboard verdicts
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// Where the game stands
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The letters typed into the active row so far
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Index of the active row (equals the number of scored rows)
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.attempt
    }

    /// The hidden target word
    ///
    /// The presentation reveals this on a loss.
    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        self.target.text()
    }

    /// Cell index the next typed letter lands in
    const fn cursor(&self) -> usize {
        self.attempt * WORD_LENGTH + self.buffer.len()
    }
}

/// Reveal order for a scored row: each cell index paired with its delay
///
/// The engine finalizes verdicts synchronously; the presentation uses this
/// schedule to stagger when each verdict becomes visible.
pub fn reveal_schedule(row: usize) -> impl Iterator<Item = (usize, Duration)> {
    (0..WORD_LENGTH).map(move |offset| (row * WORD_LENGTH + offset, REVEAL_STAGGER * offset as u32))
}
