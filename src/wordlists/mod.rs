//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access:
//! the dictionary of valid guesses and the list of possible target words.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};
