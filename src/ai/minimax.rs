use tracing::{debug, trace};

use crate::game::{GameState, GameStatus, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, LinePotentialHeuristic};
use super::random::RandomAgent;

/// What a depth-cutoff or terminal node is worth to the searching player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafScoring {
    /// Every leaf is worth 0. The tree then only breaks ties by column
    /// order; tactical play comes from the win/block shortcuts.
    #[default]
    Neutral,
    /// Leaves are scored by the agent's [`Heuristic`] from the root player's
    /// point of view.
    Heuristic,
}

/// Search configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root.
    pub depth: usize,
    pub leaf_scoring: LeafScoring,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            leaf_scoring: LeafScoring::Neutral,
        }
    }
}

/// Outcome of one minimax pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub value: i32,
    /// `None` when the root had nothing to expand.
    pub best_move: Option<usize>,
    /// Nodes visited, leaves included.
    pub nodes: u64,
}

/// First column (ascending) where `player` dropping a piece wins on the spot.
///
/// The side to move is overridden on a local copy only; `state` is never
/// modified.
pub fn winning_move(state: &GameState, player: Player) -> Option<usize> {
    state.legal_moves().into_iter().find(|&col| {
        let mut next = *state;
        next.set_current_player(player);
        next.apply_move(col) && next.status() == GameStatus::Won(player)
    })
}

/// Minimax agent with alpha-beta pruning, preceded by immediate win and
/// immediate block checks. Falls back to a random legal move when the tree
/// yields nothing.
pub struct MinimaxAgent {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    fallback: RandomAgent,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig, fallback: RandomAgent) -> Self {
        Self::with_heuristic(config, Box::new(LinePotentialHeuristic), fallback)
    }

    pub fn with_heuristic(
        config: SearchConfig,
        heuristic: Box<dyn Heuristic>,
        fallback: RandomAgent,
    ) -> Self {
        MinimaxAgent {
            config,
            heuristic,
            fallback,
        }
    }

    /// Agent with the default leaf scoring and an OS-seeded fallback.
    pub fn with_depth(depth: usize) -> Self {
        Self::new(
            SearchConfig {
                depth,
                ..SearchConfig::default()
            },
            RandomAgent::new(),
        )
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the bounded minimax pass from `state`, maximizing for the side to
    /// move.
    pub fn search(&self, state: &GameState) -> SearchResult {
        let root_player = state.current_player();
        let mut nodes = 0;
        let (value, best_move) = self.minimax(
            *state,
            self.config.depth,
            i32::MIN,
            i32::MAX,
            true,
            root_player,
            &mut nodes,
        );
        SearchResult {
            value,
            best_move,
            nodes,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        state: GameState,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root_player: Player,
        nodes: &mut u64,
    ) -> (i32, Option<usize>) {
        *nodes += 1;

        if depth == 0 || state.is_terminal() {
            return (self.leaf_value(&state, root_player), None);
        }

        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for col in state.legal_moves() {
            let mut child = state;
            if !child.apply_move(col) {
                continue;
            }

            let (value, _) =
                self.minimax(child, depth - 1, alpha, beta, !maximizing, root_player, nodes);

            // Strict comparisons: on ties the lowest column wins.
            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(col);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(col);
                }
                beta = beta.min(best_value);
            }

            if alpha >= beta {
                trace!(depth, col, alpha, beta, "cutoff");
                break;
            }
        }

        (best_value, best_move)
    }

    fn leaf_value(&self, state: &GameState, root_player: Player) -> i32 {
        match self.config.leaf_scoring {
            LeafScoring::Neutral => 0,
            LeafScoring::Heuristic => self.heuristic.evaluate(state, root_player),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let me = state.current_player();

        if let Some(col) = winning_move(state, me) {
            debug!(player = %me, col, "taking immediate win");
            return col;
        }

        if let Some(col) = winning_move(state, me.other()) {
            debug!(player = %me, col, "blocking opponent win");
            return col;
        }

        let result = self.search(state);
        match result.best_move {
            Some(col) => {
                debug!(
                    player = %me,
                    col,
                    value = result.value,
                    nodes = result.nodes,
                    "search move"
                );
                col
            }
            None => {
                debug!(player = %me, "search found no move, falling back to random");
                self.fallback.select_action(state)
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
