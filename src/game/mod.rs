//! Core Connect Four game logic: board representation, player types, and the
//! game state with in-place move application and win/draw detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DropError, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError, MAX_MOVES};
