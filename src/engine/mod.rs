//! Game state machine
//!
//! The engine owns the board, the on-screen keyboard state, the guess buffer
//! and the game status, and exposes the operations the presentation layers
//! drive: press a letter, delete a letter, submit a guess, restart.

mod board;
mod game;
mod keyboard;

pub use board::{Board, CELL_COUNT, Cell, CellState, ROWS};
pub use game::{
    DANCE_STAGGER, FLIP_DURATION, Game, GameStatus, GuessError, REVEAL_STAGGER, reveal_schedule,
};
pub use keyboard::{KEY_ROWS, Keyboard};
