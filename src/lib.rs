//! Terminal Wordle
//!
//! A Wordle game for the terminal: six tries to find a hidden five-letter word,
//! with green/yellow/gray feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_tui::engine::{Game, GameStatus};
//! use wordle_tui::wordlists::{DICTIONARY, TARGETS, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(DICTIONARY);
//! let targets = words_from_slice(TARGETS);
//!
//! let mut game = Game::new(&dictionary, &targets).unwrap();
//! for ch in "crane".chars() {
//!     game.press_letter(ch);
//! }
//! let feedback = game.submit_guess().unwrap();
//! assert!(game.status() == GameStatus::Won || !feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
