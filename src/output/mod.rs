//! Terminal output formatting
//!
//! Display utilities for the line-based CLI mode.

pub mod display;
pub mod formatters;

pub use display::{print_guess_row, print_loss, print_win};
