use tracing::{debug, info};

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{GameState, GameStatus, Player, MAX_MOVES};

use super::tally::Tally;

/// Arena configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub trials: usize,
    /// Print the board after every move.
    pub visualize: bool,
    /// Seed for all agent randomness; OS entropy when absent.
    pub seed: Option<u64>,
    /// Seat whose wins and losses are reported.
    pub hero: Player,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            trials: 1,
            visualize: false,
            seed: None,
            hero: GameState::FIRST_PLAYER,
        }
    }
}

/// A finished game: final status and the columns played, in order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameRecord {
    pub status: GameStatus,
    pub moves: Vec<usize>,
}

/// Seats two agents and plays games between them.
pub struct Arena {
    red: Box<dyn Agent>,
    yellow: Box<dyn Agent>,
    visualize: bool,
}

impl Arena {
    pub fn new(red: Box<dyn Agent>, yellow: Box<dyn Agent>) -> Self {
        Arena {
            red,
            yellow,
            visualize: false,
        }
    }

    pub fn with_visualization(mut self, visualize: bool) -> Self {
        self.visualize = visualize;
        self
    }

    /// Play one game from the initial position until it is won or drawn.
    pub fn play_game(&mut self) -> Result<GameRecord, ArenaError> {
        let mut state = GameState::initial();
        let mut moves = Vec::with_capacity(MAX_MOVES);

        while !state.is_terminal() {
            let player = state.current_player();
            let column = match player {
                Player::Red => self.red.select_action(&state),
                Player::Yellow => self.yellow.select_action(&state),
            };

            if !state.apply_move(column) {
                return Err(ArenaError::IllegalMove {
                    player,
                    column,
                    legal: state.legal_moves(),
                });
            }
            moves.push(column);

            if self.visualize {
                println!("Player {player} placed in column {column}");
                println!("{state}");
            }
        }

        Ok(GameRecord {
            status: state.status(),
            moves,
        })
    }

    /// Play `trials` games and tally the results.
    pub fn run_trials(&mut self, trials: usize) -> Result<Tally, ArenaError> {
        if trials == 0 {
            return Err(ArenaError::NoTrials);
        }

        info!(
            trials,
            red = self.red.name(),
            yellow = self.yellow.name(),
            "starting trials"
        );

        let mut tally = Tally::new();
        for game_idx in 0..trials {
            let record = self.play_game()?;
            debug!(game_idx, result = %record.status, moves = record.moves.len());
            tally.record(&record);
        }

        info!(
            red_wins = tally.wins(Player::Red),
            yellow_wins = tally.wins(Player::Yellow),
            draws = tally.draws(),
            "trials complete"
        );
        Ok(tally)
    }
}
