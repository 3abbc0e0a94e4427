use std::fmt;

use super::board::{self, Board, DropError};
use super::Player;

/// Terminal status of a game. Exactly one variant holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
            GameStatus::Draw => f.write_str("draw"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is already over")]
    GameOver,
}

impl From<DropError> for MoveError {
    fn from(e: DropError) -> Self {
        match e {
            DropError::ColumnFull => MoveError::ColumnFull,
            DropError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// Full game position: grid, side to move and status.
///
/// `GameState` is `Copy`; search explores hypothetical lines on copies and
/// never touches the state the caller holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Player who moves first in a new game.
    pub const FIRST_PLAYER: Player = Player::Yellow;

    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Self::FIRST_PLAYER,
            status: GameStatus::Ongoing,
        }
    }

    /// Get current player (side to move)
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Override the side to move.
    ///
    /// Used to ask "what if the other player moved here?" on a throwaway
    /// copy, and by tests that build positions with one player only.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Columns whose top cell is empty, ascending. Depends on the grid only.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.open_columns()
    }

    /// Apply a move in place, returning the row the piece landed in.
    ///
    /// On success the side to move always flips, including when the move
    /// ends the game; read [`GameState::status`] to learn who won.
    pub fn try_apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())?;

        if self.board.check_win(row, column) {
            self.status = GameStatus::Won(self.current_player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }

        self.current_player = self.current_player.other();

        Ok(row)
    }

    /// Apply a move in place. Returns `false`, leaving the state untouched,
    /// if the column is out of range, full, or the game is over.
    #[must_use]
    pub fn apply_move(&mut self, column: usize) -> bool {
        self.try_apply_move(column).is_ok()
    }

    /// Apply a move and return the resulting state, leaving `self` as is.
    pub fn with_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.try_apply_move(column)?;
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// Number of cells in a full grid; an upper bound on game length.
pub const MAX_MOVES: usize = board::ROWS * board::COLS;
